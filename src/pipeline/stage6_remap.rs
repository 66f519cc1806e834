use crate::model::student::StudentRecord;

/// Projected score for every student if the rule's band substitution were
/// applied wherever a student sits in the same band as the rule targets.
pub fn remap_population(
    students: &[StudentRecord],
    category_indices: &[usize],
    target_bands: &[Option<usize>],
    shifts: &[f64],
) -> Vec<f64> {
    students
        .iter()
        .map(|student| {
            let mut score = student.score;
            for ((&k, target), &shift) in category_indices.iter().zip(target_bands).zip(shifts) {
                let Some(target) = target else {
                    continue;
                };
                if student.band_index_at(k) == Some(*target) {
                    score -= shift;
                }
            }
            score
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_remap.rs"]
mod tests;
