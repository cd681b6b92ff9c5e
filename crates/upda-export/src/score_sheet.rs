use std::fs;
use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use upda_core::encoding::encode_winansi;
use upda_core::models::score::PatientScore;
use upda_core::paths;

use crate::error::ExportError;
use crate::layout::{self, Position};

/// Text stamped under the patient name, e.g. `2026-10-19 14:03:27.120934`.
/// The fraction is left off when the microsecond is zero.
pub fn timestamp_text(generated_at: DateTime) -> String {
    let seconds = generated_at.strftime("%Y-%m-%d %H:%M:%S").to_string();
    match generated_at.subsec_nanosecond() / 1_000 {
        0 => seconds,
        micros => format!("{seconds}.{micros:06}"),
    }
}

/// A single labelled string and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub text: String,
}

/// The eight-field score page for one patient.
#[derive(Debug, Clone)]
pub struct ScoreSheet {
    placements: Vec<Placement>,
}

impl ScoreSheet {
    pub fn new(score: &PatientScore, generated_at: DateTime) -> Self {
        let mut placements = vec![
            Placement {
                position: layout::name_position(),
                text: score.name.clone(),
            },
            Placement {
                position: layout::timestamp_position(),
                text: timestamp_text(generated_at),
            },
        ];

        for (metric, value) in score.rows() {
            placements.push(Placement {
                position: layout::percentage_position(metric),
                text: value.percentage_text(),
            });
            placements.push(Placement {
                position: layout::raw_position(metric),
                text: value.raw_text(),
            });
        }

        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Build the one-page letter-size document.
    pub fn to_document(&self) -> Result<Document, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => layout::FONT_FACE,
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                layout::FONT_NAME => font_id,
            },
        });

        let content = Content {
            operations: self.operations()?,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                layout::PAGE_WIDTH.into(),
                layout::PAGE_HEIGHT.into(),
            ],
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        Ok(doc)
    }

    pub fn render(&self) -> Result<Vec<u8>, ExportError> {
        let mut doc = self.to_document()?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn operations(&self) -> Result<Vec<Operation>, ExportError> {
        let mut ops = vec![
            // Black stroke and fill.
            Operation::new("RG", vec![0.into(), 0.into(), 0.into()]),
            Operation::new("rg", vec![0.into(), 0.into(), 0.into()]),
        ];

        for placement in &self.placements {
            let text = encode_winansi(&placement.text).map_err(|character| {
                ExportError::Unprintable {
                    text: placement.text.clone(),
                    character,
                }
            })?;

            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new(
                "Tf",
                vec![layout::FONT_NAME.into(), layout::FONT_SIZE.into()],
            ));
            ops.push(Operation::new(
                "Td",
                vec![placement.position.x.into(), placement.position.y.into()],
            ));
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(text, StringFormat::Literal)],
            ));
            ops.push(Operation::new("ET", vec![]));
        }

        Ok(ops)
    }
}

/// Render the sheet into `<patient_dir>/score.pdf`.
///
/// Nothing is written when the patient directory is missing.
pub fn write_score_sheet(
    patient_dir: &Path,
    score: &PatientScore,
    generated_at: DateTime,
) -> Result<PathBuf, ExportError> {
    if !patient_dir.is_dir() {
        tracing::error!(
            path = %patient_dir.display(),
            "patient directory does not exist, cannot generate score sheet"
        );
        return Err(ExportError::PatientDirMissing {
            path: patient_dir.to_path_buf(),
        });
    }

    let bytes = ScoreSheet::new(score, generated_at).render()?;
    let path = paths::score_pdf(patient_dir);
    fs::write(&path, &bytes)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "score sheet written");
    Ok(path)
}
