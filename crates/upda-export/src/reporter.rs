use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use upda_core::models::score::PatientScore;
use upda_core::paths;

use crate::config::ReportConfig;
use crate::error::ExportError;
use crate::merge::merge_report;
use crate::score_sheet::write_score_sheet;

/// Files produced by a successful [`Reporter::generate_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub score_path: PathBuf,
    pub report_path: PathBuf,
}

/// Renders a patient's score sheet and merges it onto the report template.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Where the merged report for `patient_dir` is written.
    pub fn report_path(&self, patient_dir: &Path) -> PathBuf {
        paths::report_pdf(&self.config.data_root, patient_dir)
    }

    /// Score sheet then merge, stamped with the current local time.
    pub fn generate_report(
        &self,
        patient_dir: &Path,
        score: &PatientScore,
    ) -> Result<ReportArtifacts, ExportError> {
        self.generate_report_at(patient_dir, score, jiff::Zoned::now().datetime())
    }

    /// Score sheet then merge. The merge only runs once the score sheet is
    /// on disk; an invalid table or missing patient directory writes nothing.
    pub fn generate_report_at(
        &self,
        patient_dir: &Path,
        score: &PatientScore,
        generated_at: DateTime,
    ) -> Result<ReportArtifacts, ExportError> {
        let span = tracing::info_span!("generate_report", patient = %patient_dir.display());
        let _enter = span.enter();

        let score_path = self.generate_score_at(patient_dir, score, generated_at)?;
        let report_path = self.merge(patient_dir)?;

        Ok(ReportArtifacts {
            score_path,
            report_path,
        })
    }

    /// Write `<patient_dir>/score.pdf` only, stamped with the current local time.
    pub fn generate_score(
        &self,
        patient_dir: &Path,
        score: &PatientScore,
    ) -> Result<PathBuf, ExportError> {
        self.generate_score_at(patient_dir, score, jiff::Zoned::now().datetime())
    }

    pub fn generate_score_at(
        &self,
        patient_dir: &Path,
        score: &PatientScore,
        generated_at: DateTime,
    ) -> Result<PathBuf, ExportError> {
        let errors = score.validate();
        if !errors.is_empty() {
            tracing::warn!(count = errors.len(), "score table failed validation");
            return Err(ExportError::InvalidScores(errors));
        }
        write_score_sheet(patient_dir, score, generated_at)
    }

    /// Overlay an existing `<patient_dir>/score.pdf` onto the template.
    pub fn merge(&self, patient_dir: &Path) -> Result<PathBuf, ExportError> {
        let score_path = paths::score_pdf(patient_dir);
        let report_path = self.report_path(patient_dir);
        merge_report(&self.config.template_path, &score_path, &report_path)?;
        Ok(report_path)
    }
}
