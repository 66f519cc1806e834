use serde::Serialize;

use crate::model::rule::CandidateRule;
use crate::report::rubric::RubricCategoryStats;
use crate::report::{MarkStats, ReportError};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMeta {
    pub rubric: String,
    pub marks: String,
    pub reference: String,
    pub n_submissions_raw: usize,
    pub n_unsubmitted: usize,
    pub n_students: usize,
    pub n_categories: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamsMeta {
    pub variance: f64,
    pub threshold: f64,
    pub alignment: String,
    pub order: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMeta {
    pub n_cases: usize,
    pub n_lower: usize,
    pub n_raise: usize,
    pub n_drafts: usize,
    pub n_rules: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub label: &'static str,
    pub scores: usize,
    pub reference: usize,
}

/// One aligned student; the i-th entry pairs with `projectedScores[i]` of every rule.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationEntry {
    pub id: String,
    pub score: f64,
    pub reference: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub params: ParamsMeta,
    pub results: ResultMeta,
    pub scores: MarkStats,
    pub reference: MarkStats,
    pub histogram: Vec<HistogramBin>,
    pub rubric: Vec<RubricCategoryStats>,
    pub population: Vec<PopulationEntry>,
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, ReportError> {
    serde_json::to_string_pretty(data).map_err(|source| ReportError::Json {
        what: "summary",
        source,
    })
}

pub fn render_rules_json(rules: &[CandidateRule]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(rules).map_err(|source| ReportError::Json {
        what: "rules",
        source,
    })
}
