use tracing::warn;

use crate::model::params::Alignment;
use crate::model::student::StudentRecord;

/// Students paired with reference values; index i of `students` compares
/// against index i of `reference`, and this order is the population order
/// used by every later stage.
#[derive(Debug, Clone)]
pub struct AlignedPopulation {
    pub students: Vec<StudentRecord>,
    pub reference: Vec<f64>,
}

impl AlignedPopulation {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.students.iter().map(|s| s.score).collect()
    }
}

pub fn align_population(
    students: &[StudentRecord],
    reference: &[f64],
    alignment: Alignment,
) -> AlignedPopulation {
    let n = students.len().min(reference.len());
    if students.len() != reference.len() {
        warn!(
            "population has {} students but reference has {} values; using the first {}",
            students.len(),
            reference.len(),
            n
        );
    }

    let mut students = students[..n].to_vec();
    let mut reference = reference[..n].to_vec();

    if alignment == Alignment::Rank {
        students.sort_by(|a, b| a.score.total_cmp(&b.score));
        reference.sort_by(|a, b| a.total_cmp(b));
    }

    AlignedPopulation {
        students,
        reference,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_align.rs"]
mod tests;
