use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::input::InputBundle;
use crate::model::rule::Direction;
use crate::pipeline::BandShiftReport;
use crate::pipeline::stage8_rank::RuleOrder;
use crate::report::json::{
    HistogramBin, InputMeta, ParamsMeta, PopulationEntry, ResultMeta, SummaryData, ToolMeta,
    render_rules_json, render_summary_json,
};
use crate::report::rubric::rubric_stats;
use crate::report::text::render_report_text;
use crate::report::{HISTOGRAM_LABELS, ReportError, histogram, mark_stats};

#[derive(Debug, Clone)]
pub struct Stage9Input<'a> {
    pub bundle: &'a InputBundle,
    pub report: &'a BandShiftReport,
    pub order: RuleOrder,
    pub top: usize,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage9Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.display().to_string(),
        source,
    })?;

    let rules = input.report.ranked(input.order);

    let rules_path = out_dir.join("rules.json");
    write_text(&rules_path, &render_rules_json(&rules)?)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(
        &report_path,
        &render_report_text(&summary, &rules, input.top),
    )?;

    info!(
        "wrote {}, {} and {}",
        rules_path.display(),
        summary_path.display(),
        report_path.display()
    );
    Ok(())
}

pub fn build_summary(input: &Stage9Input<'_>) -> SummaryData {
    let bundle = input.bundle;
    let report = input.report;

    let scores = report.population.scores();
    let score_bins = histogram(&scores);
    let reference_bins = histogram(&report.population.reference);
    let n_lower = report
        .cases
        .iter()
        .filter(|c| Direction::from_diff(c.diff) == Direction::Lower)
        .count();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            rubric: bundle.rubric_path.display().to_string(),
            marks: bundle.marks_path.display().to_string(),
            reference: bundle.reference_path.display().to_string(),
            n_submissions_raw: bundle.n_submissions_raw,
            n_unsubmitted: bundle.n_unsubmitted,
            n_students: report.population.len(),
            n_categories: bundle.rubric.len(),
        },
        params: ParamsMeta {
            variance: report.params.variance,
            threshold: report.params.threshold,
            alignment: report.params.alignment.name().to_string(),
            order: input.order.name().to_string(),
        },
        results: ResultMeta {
            n_cases: report.cases.len(),
            n_lower,
            n_raise: report.cases.len() - n_lower,
            n_drafts: report.n_drafts,
            n_rules: report.rules().len(),
        },
        scores: mark_stats(&scores),
        reference: mark_stats(&report.population.reference),
        histogram: HISTOGRAM_LABELS
            .iter()
            .enumerate()
            .map(|(i, &label)| HistogramBin {
                label,
                scores: score_bins[i],
                reference: reference_bins[i],
            })
            .collect(),
        rubric: rubric_stats(&bundle.rubric, &report.population.students),
        population: report
            .population
            .students
            .iter()
            .zip(&report.population.reference)
            .map(|(student, &reference)| PopulationEntry {
                id: student.id.clone(),
                score: student.score,
                reference,
            })
            .collect(),
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage9_report.rs"]
mod tests;
