use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

pub mod marks;
pub mod reference;
pub mod rubric;

use crate::model::rubric::Rubric;
use crate::model::student::StudentRecord;
use marks::load_marks;
use reference::load_reference;
use rubric::load_rubric;

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub rubric_path: PathBuf,
    pub marks_path: PathBuf,
    pub reference_path: PathBuf,
    pub rubric: Rubric,
    pub students: Vec<StudentRecord>,
    pub reference: Vec<f64>,
    pub n_submissions_raw: usize,
    pub n_unsubmitted: usize,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

pub fn load_input(
    rubric_path: &Path,
    marks_path: &Path,
    reference_path: &Path,
) -> Result<InputBundle, InputError> {
    let rubric = load_rubric(rubric_path)?;
    let marks = load_marks(marks_path, &rubric)?;
    let reference = load_reference(reference_path)?;

    if reference.len() != marks.students.len() {
        return Err(InputError::InvalidInput(format!(
            "reference has {} values but {} scored submissions were loaded",
            reference.len(),
            marks.students.len()
        )));
    }

    info!(
        "loaded inputs: categories={}, submissions={}, scored={}, reference={}",
        rubric.len(),
        marks.n_raw,
        marks.students.len(),
        reference.len()
    );

    Ok(InputBundle {
        rubric_path: rubric_path.to_path_buf(),
        marks_path: marks_path.to_path_buf(),
        reference_path: reference_path.to_path_buf(),
        rubric,
        students: marks.students,
        reference,
        n_submissions_raw: marks.n_raw,
        n_unsubmitted: marks.n_unsubmitted,
    })
}

/// Ids arrive as JSON numbers or strings; both are kept as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
