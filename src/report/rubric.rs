use serde::Serialize;

use crate::model::rubric::{Rubric, RubricCategory};
use crate::model::rule::round2;
use crate::model::student::StudentRecord;
use crate::report::{MarkStats, mark_stats};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricCategoryStats {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub band_labels: Vec<String>,
    pub band_counts: Vec<usize>,
    pub missing: usize,
    pub stats: MarkStats,
    pub scaled: MarkStats,
}

/// Per-category statistics. The awarded band indices are gathered first
/// into an immutable snapshot, then each row is computed from it.
pub fn rubric_stats(rubric: &Rubric, students: &[StudentRecord]) -> Vec<RubricCategoryStats> {
    let awarded: Vec<Vec<usize>> = (0..rubric.len())
        .map(|k| students.iter().filter_map(|s| s.band_index_at(k)).collect())
        .collect();

    rubric
        .categories
        .iter()
        .zip(&awarded)
        .map(|(category, bands)| category_row(category, bands, students.len()))
        .collect()
}

fn category_row(
    category: &RubricCategory,
    awarded: &[usize],
    n_students: usize,
) -> RubricCategoryStats {
    let mut band_counts = vec![0usize; category.band_count()];
    let mut scores = Vec::with_capacity(awarded.len());
    for &idx in awarded {
        if let Some(points) = category.band_points(idx) {
            band_counts[idx] += 1;
            scores.push(points);
        }
    }

    let scaled: Vec<f64> = scores
        .iter()
        .map(|&v| {
            if category.points > 0.0 {
                round2(v / category.points * 100.0)
            } else {
                0.0
            }
        })
        .collect();

    RubricCategoryStats {
        id: category.id.clone(),
        name: category.name.clone(),
        points: category.points,
        band_labels: category.bands.iter().map(|b| b.label.clone()).collect(),
        band_counts,
        missing: n_students - awarded.len(),
        stats: mark_stats(&scores),
        scaled: mark_stats(&scaled),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/rubric.rs"]
mod tests;
