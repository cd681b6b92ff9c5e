//! Filesystem layout for patient folders and report artifacts.
//!
//! Pure path functions — nothing here touches the disk.

use std::path::{Component, Path, PathBuf};

pub const SCORE_FILENAME: &str = "score.pdf";

pub const REPORT_FILENAME: &str = "UPDAReport.pdf";

pub const DEFAULT_DATA_ROOT: &str = "./data";

pub const DEFAULT_TEMPLATE: &str = "./resources/HeadScore.pdf";

pub fn score_pdf(patient_dir: &Path) -> PathBuf {
    patient_dir.join(SCORE_FILENAME)
}

/// Directory the merged report lands in.
///
/// A patient directory already under `data_root` is used unchanged; anything
/// else is re-rooted under `data_root`. Both sides are compared with `.`
/// components removed, so `./data/patient-1` and `data/patient-1` are the
/// same place and never nest as `data/data/patient-1`.
pub fn report_dir(data_root: &Path, patient_dir: &Path) -> PathBuf {
    let root = without_cur_dir(data_root);
    let patient = without_cur_dir(patient_dir);

    if patient.starts_with(&root) {
        return patient;
    }

    let relative: PathBuf = patient
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect();
    root.join(relative)
}

pub fn report_pdf(data_root: &Path, patient_dir: &Path) -> PathBuf {
    report_dir(data_root, patient_dir).join(REPORT_FILENAME)
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
