pub mod stage1_align;
pub mod stage2_outliers;
pub mod stage3_combos;
pub mod stage4_shift;
pub mod stage5_accept;
pub mod stage6_remap;
pub mod stage7_consolidate;
pub mod stage8_rank;
pub mod stage9_report;

use tracing::info;

use crate::model::params::{BandShiftParams, ParamError};
use crate::model::rubric::Rubric;
use crate::model::rule::CandidateRule;
use crate::model::student::StudentRecord;
use stage1_align::{AlignedPopulation, align_population};
use stage2_outliers::{OutlierCase, detect_outliers};
use stage5_accept::{Stage5Inputs, run_stage5};
use stage7_consolidate::consolidate;
use stage8_rank::{RuleOrder, by_category_count_asc, by_fix_count_desc};

/// Owns one band-shift computation: the aligned population it ran against
/// and the consolidated rules. Consumers read it by reference.
#[derive(Debug, Clone)]
pub struct BandShiftReport {
    pub params: BandShiftParams,
    pub population: AlignedPopulation,
    pub cases: Vec<OutlierCase>,
    pub n_drafts: usize,
    rules: Vec<CandidateRule>,
}

impl BandShiftReport {
    pub fn rules(&self) -> &[CandidateRule] {
        &self.rules
    }

    pub fn by_fix_count_desc(&self) -> Vec<CandidateRule> {
        by_fix_count_desc(&self.rules)
    }

    pub fn by_category_count_asc(&self) -> Vec<CandidateRule> {
        by_category_count_asc(&self.rules)
    }

    pub fn ranked(&self, order: RuleOrder) -> Vec<CandidateRule> {
        match order {
            RuleOrder::FixCount => self.by_fix_count_desc(),
            RuleOrder::CategoryCount => self.by_category_count_asc(),
        }
    }
}

pub fn run_band_shift(
    rubric: &Rubric,
    students: &[StudentRecord],
    reference: &[f64],
    params: &BandShiftParams,
) -> Result<BandShiftReport, ParamError> {
    params.validate()?;

    let population = align_population(students, reference, params.alignment);
    if population.is_empty() || rubric.is_empty() {
        info!(
            "nothing to analyse: students={}, categories={}",
            population.len(),
            rubric.len()
        );
        return Ok(BandShiftReport {
            params: params.clone(),
            population,
            cases: Vec::new(),
            n_drafts: 0,
            rules: Vec::new(),
        });
    }

    let cases = detect_outliers(&population, params.variance);
    info!(
        "{} of {} students deviate from the reference by more than {}",
        cases.len(),
        population.len(),
        params.variance
    );

    let drafts = run_stage5(
        &Stage5Inputs {
            rubric,
            population: &population,
            threshold: params.threshold,
        },
        &cases,
    );
    let n_drafts = drafts.len();
    let rules = consolidate(drafts);
    info!(
        "{} accepted combinations consolidated into {} candidate rules",
        n_drafts,
        rules.len()
    );

    Ok(BandShiftReport {
        params: params.clone(),
        population,
        cases,
        n_drafts,
        rules,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
