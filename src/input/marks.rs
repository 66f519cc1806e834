use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::input::{InputError, RawId, read_json};
use crate::model::rubric::Rubric;
use crate::model::student::{AwardedBand, StudentRecord};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAwardedBand {
    pub category_id: RawId,
    pub band_index: usize,
    #[serde(default)]
    pub band_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub id: RawId,
    pub score: Option<f64>,
    #[serde(default)]
    pub bands: Vec<RawAwardedBand>,
}

#[derive(Debug, Clone)]
pub struct LoadedMarks {
    pub students: Vec<StudentRecord>,
    pub n_raw: usize,
    pub n_unsubmitted: usize,
}

pub fn load_marks(path: &Path, rubric: &Rubric) -> Result<LoadedMarks, InputError> {
    let raw: Vec<RawSubmission> = read_json(path)?;
    build_students(raw, rubric)
}

pub fn build_students(
    raw: Vec<RawSubmission>,
    rubric: &Rubric,
) -> Result<LoadedMarks, InputError> {
    let n_raw = raw.len();
    let mut students = Vec::with_capacity(n_raw);
    let mut n_unsubmitted = 0usize;

    for submission in raw {
        let id = submission.id.into_string();
        let Some(score) = submission.score else {
            n_unsubmitted += 1;
            continue;
        };

        let mut bands: Vec<Option<AwardedBand>> = vec![None; rubric.len()];
        for entry in submission.bands {
            let category_id = entry.category_id.into_string();
            let Some(pos) = rubric.position_of(&category_id) else {
                warn!(
                    "submission {} names unknown rubric category {}; entry ignored",
                    id, category_id
                );
                continue;
            };
            let category = &rubric.categories[pos];
            if entry.band_index >= category.band_count() {
                return Err(InputError::InvalidInput(format!(
                    "submission {} awards band {} in category {} which has {} bands",
                    id,
                    entry.band_index,
                    category.id,
                    category.band_count()
                )));
            }
            if bands[pos].is_some() {
                return Err(InputError::InvalidInput(format!(
                    "submission {} has more than one band for category {}",
                    id, category.id
                )));
            }
            bands[pos] = Some(AwardedBand {
                category_id,
                band_index: entry.band_index,
                band_label: entry.band_label,
            });
        }

        students.push(StudentRecord { id, score, bands });
    }

    if n_unsubmitted > 0 {
        info!("skipped {} submissions without a score", n_unsubmitted);
    }

    Ok(LoadedMarks {
        students,
        n_raw,
        n_unsubmitted,
    })
}
