use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, RawId, read_json};
use crate::model::rubric::{Band, Rubric, RubricCategory};

#[derive(Debug, Clone, Deserialize)]
pub struct RawBand {
    pub index: usize,
    pub points: f64,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: RawId,
    pub name: String,
    #[serde(default)]
    pub points: Option<f64>,
    pub bands: Vec<RawBand>,
}

pub fn load_rubric(path: &Path) -> Result<Rubric, InputError> {
    let raw: Vec<RawCategory> = read_json(path)?;
    build_rubric(raw)
}

pub fn build_rubric(raw: Vec<RawCategory>) -> Result<Rubric, InputError> {
    let mut categories: Vec<RubricCategory> = Vec::with_capacity(raw.len());
    for cat in raw {
        let id = cat.id.into_string();
        if categories.iter().any(|c| c.id == id) {
            return Err(InputError::InvalidInput(format!(
                "duplicate rubric category id {id}"
            )));
        }
        // Rules are keyed by the joined category names.
        if categories.iter().any(|c| c.name == cat.name) {
            return Err(InputError::InvalidInput(format!(
                "duplicate rubric category name {}",
                cat.name
            )));
        }
        let mut bands: Vec<Band> = cat
            .bands
            .into_iter()
            .map(|b| Band {
                index: b.index,
                points: b.points,
                label: b.label,
            })
            .collect();
        bands.sort_by_key(|b| b.index);
        // Total points default to the top band when the source omits them.
        let points = cat
            .points
            .unwrap_or_else(|| bands.first().map(|b| b.points).unwrap_or(0.0));
        let category = RubricCategory {
            id,
            name: cat.name,
            points,
            bands,
        };
        category.check_bands().map_err(InputError::InvalidInput)?;
        categories.push(category);
    }
    Ok(Rubric { categories })
}
