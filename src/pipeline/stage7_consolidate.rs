use std::collections::HashMap;

use tracing::debug;

use crate::model::rule::CandidateRule;

/// Merges drafts that target the same categories and bands. The first draft
/// seen for a target survives and absorbs counts, residuals and case ids of
/// later duplicates; absorbed drafts are dropped.
pub fn consolidate(mut drafts: Vec<CandidateRule>) -> Vec<CandidateRule> {
    let n_drafts = drafts.len();
    let mut survivors: HashMap<(String, Vec<Option<usize>>), usize> = HashMap::new();

    for idx in 0..drafts.len() {
        if !drafts[idx].active {
            continue;
        }
        let key = (
            drafts[idx].categories.clone(),
            drafts[idx].target_bands.clone(),
        );
        match survivors.get(&key) {
            Some(&first) => {
                let fix_count = drafts[idx].fix_count;
                let total = drafts[idx].total_residual;
                let cases = std::mem::take(&mut drafts[idx].matched_student_ids);
                drafts[idx].active = false;

                let survivor = &mut drafts[first];
                survivor.fix_count += fix_count;
                survivor.total_residual += total;
                survivor.matched_student_ids.extend(cases);
            }
            None => {
                survivors.insert(key, idx);
            }
        }
    }

    let mut rules: Vec<CandidateRule> = drafts.into_iter().filter(|d| d.active).collect();
    for rule in &mut rules {
        rule.refresh_gap();
    }
    debug!(
        "consolidated {} drafts into {} rules",
        n_drafts,
        rules.len()
    );
    rules
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_consolidate.rs"]
mod tests;
