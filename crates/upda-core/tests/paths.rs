use std::path::{Path, PathBuf};

use upda_core::paths::{self, REPORT_FILENAME, SCORE_FILENAME};

#[test]
fn score_pdf_lives_in_patient_dir() {
    assert_eq!(
        paths::score_pdf(Path::new("./data/patient-1")),
        Path::new("./data/patient-1").join(SCORE_FILENAME)
    );
}

#[test]
fn patient_dir_under_data_root_is_not_nested_again() {
    let report = paths::report_pdf(Path::new("./data"), Path::new("./data/patient-1"));
    assert_eq!(report, PathBuf::from("data/patient-1").join(REPORT_FILENAME));
}

#[test]
fn bare_patient_dir_is_rooted_under_data() {
    let dir = paths::report_dir(Path::new("./data"), Path::new("patient-1"));
    assert_eq!(dir, PathBuf::from("data/patient-1"));
}

#[test]
fn dot_prefixed_patient_dir_outside_root_is_rooted_under_data() {
    let dir = paths::report_dir(Path::new("./data"), Path::new("./scans/patient-3"));
    assert_eq!(dir, PathBuf::from("data/scans/patient-3"));
}

#[test]
fn absolute_patient_dir_under_absolute_root_is_kept() {
    let dir = paths::report_dir(Path::new("/srv/upda/data"), Path::new("/srv/upda/data/p9"));
    assert_eq!(dir, PathBuf::from("/srv/upda/data/p9"));
}

#[test]
fn absolute_patient_dir_outside_root_is_re_rooted() {
    let dir = paths::report_dir(Path::new("/srv/data"), Path::new("/tmp/p9"));
    assert_eq!(dir, PathBuf::from("/srv/data/tmp/p9"));
}

#[test]
fn sibling_with_shared_prefix_is_not_under_root() {
    // `data-archive` shares a string prefix with `data` but is a different directory.
    let dir = paths::report_dir(Path::new("data"), Path::new("data-archive/p1"));
    assert_eq!(dir, PathBuf::from("data/data-archive/p1"));
}
