use tracing::{debug, warn};

use crate::model::rubric::Rubric;
use crate::model::rule::{CandidateRule, Direction};
use crate::pipeline::stage1_align::AlignedPopulation;
use crate::pipeline::stage2_outliers::OutlierCase;
use crate::pipeline::stage3_combos::{CategoryRange, enumerate_ranges};
use crate::pipeline::stage4_shift::{ShiftOutcome, category_shift};
use crate::pipeline::stage6_remap::remap_population;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub rubric: &'a Rubric,
    pub population: &'a AlignedPopulation,
    pub threshold: f64,
}

pub fn is_accepted(sum_diff: f64, diff: f64, threshold: f64) -> bool {
    (sum_diff - diff).abs() < threshold
}

pub fn run_stage5(inputs: &Stage5Inputs<'_>, cases: &[OutlierCase]) -> Vec<CandidateRule> {
    let ranges = enumerate_ranges(inputs.rubric.len());
    let mut drafts = Vec::new();
    for case in cases {
        drafts.extend(evaluate_case(inputs, case, &ranges));
    }
    drafts
}

pub fn evaluate_case(
    inputs: &Stage5Inputs<'_>,
    case: &OutlierCase,
    ranges: &[CategoryRange],
) -> Vec<CandidateRule> {
    let rubric = inputs.rubric;
    let student = &inputs.population.students[case.position];
    let direction = Direction::from_diff(case.diff);

    let outcomes: Vec<ShiftOutcome> = rubric
        .categories
        .iter()
        .enumerate()
        .map(|(k, category)| category_shift(category, student.band_at(k), direction))
        .collect();
    for (k, outcome) in outcomes.iter().enumerate() {
        if outcome.is_missing() {
            warn!(
                "student {} has no awarded band for category {}; shift treated as 0",
                student.id, rubric.categories[k].name
            );
        }
    }

    let mut drafts = Vec::new();
    for range in ranges {
        let sum_diff: f64 = range.indices().map(|k| outcomes[k].value()).sum();
        if !is_accepted(sum_diff, case.diff, inputs.threshold) {
            continue;
        }
        drafts.push(build_draft(inputs, case, *range, direction, &outcomes, sum_diff));
    }

    debug!(
        "student {} (diff {:.2}): {} of {} combinations accepted",
        student.id,
        case.diff,
        drafts.len(),
        ranges.len()
    );
    drafts
}

fn build_draft(
    inputs: &Stage5Inputs<'_>,
    case: &OutlierCase,
    range: CategoryRange,
    direction: Direction,
    outcomes: &[ShiftOutcome],
    sum_diff: f64,
) -> CandidateRule {
    let student = &inputs.population.students[case.position];
    let indices: Vec<usize> = range.indices().collect();

    let category_names: Vec<String> = indices
        .iter()
        .map(|&k| inputs.rubric.categories[k].name.clone())
        .collect();
    let target_bands: Vec<Option<usize>> =
        indices.iter().map(|&k| student.band_index_at(k)).collect();
    let band_labels: Vec<Option<String>> = indices
        .iter()
        .map(|&k| student.band_at(k).map(|b| b.band_label.clone()))
        .collect();
    let per_category_shift: Vec<f64> = indices.iter().map(|&k| outcomes[k].value()).collect();

    let projected_scores = remap_population(
        &inputs.population.students,
        &indices,
        &target_bands,
        &per_category_shift,
    );

    let mut rule = CandidateRule {
        categories: category_names.join(" "),
        category_count: range.len(),
        category_names,
        category_indices: indices,
        direction,
        target_bands,
        band_labels,
        per_category_shift,
        sum_shift: sum_diff,
        matched_student_ids: vec![student.id.clone()],
        fix_count: 1,
        total_residual: case.diff - sum_diff,
        gap: 0.0,
        projected_scores,
        active: true,
    };
    rule.refresh_gap();
    rule
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_accept.rs"]
mod tests;
