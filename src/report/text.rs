use crate::model::rule::CandidateRule;
use crate::report::MarkStats;
use crate::report::json::SummaryData;

pub fn render_report_text(data: &SummaryData, rules: &[CandidateRule], top: usize) -> String {
    let mut out = String::new();

    out.push_str("Rubric Band Shift Report\n");
    out.push_str("========================\n\n");

    out.push_str("1. Population\n");
    out.push_str(&format!(
        "Submissions: {} ({} without a score)\n",
        data.input.n_submissions_raw, data.input.n_unsubmitted
    ));
    out.push_str(&format!("Scored students: {}\n", data.input.n_students));
    out.push_str(&format!("Rubric categories: {}\n", data.input.n_categories));
    out.push_str(&format!("Actual:    {}\n", stats_line(&data.scores)));
    out.push_str(&format!("Reference: {}\n\n", stats_line(&data.reference)));

    out.push_str("2. Outliers\n");
    out.push_str(&format!(
        "Variance: {}  Threshold: {}  Alignment: {}\n",
        data.params.variance, data.params.threshold, data.params.alignment
    ));
    out.push_str(&format!(
        "Students beyond variance: {} (above target: {}, below target: {})\n\n",
        data.results.n_cases, data.results.n_lower, data.results.n_raise
    ));

    out.push_str("3. Candidate band shifts\n");
    out.push_str(&format!(
        "Accepted combinations: {}  Consolidated rules: {}  Order: {}\n",
        data.results.n_drafts, data.results.n_rules, data.params.order
    ));
    if rules.is_empty() {
        out.push_str("No band shift brings an outlier within threshold of the target.\n");
    }
    for (i, rule) in rules.iter().take(top).enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, rule_label(rule)));
        out.push_str(&format!(
            "     gap {:.2}, shift {:.2}, students: {}\n",
            rule.gap,
            rule.sum_shift,
            rule.matched_student_ids.join(", ")
        ));
    }
    if rules.len() > top {
        out.push_str(&format!(
            "... {} more in rules.json\n",
            rules.len() - top
        ));
    }

    out
}

/// `Move Down:- Design: Good; Testing: Thorough;  (3)`
pub fn rule_label(rule: &CandidateRule) -> String {
    let mut label = format!("{}:- ", rule.direction.label());
    for (name, band) in rule.category_names.iter().zip(&rule.band_labels) {
        label.push_str(&format!("{}: {}; ", name, band.as_deref().unwrap_or("?")));
    }
    label.push_str(&format!(" ({})", rule.fix_count));
    label
}

fn stats_line(stats: &MarkStats) -> String {
    format!(
        "n={} mean={:.2} min={:.2} q1={:.2} median={:.2} q3={:.2} max={:.2}",
        stats.count, stats.average, stats.min, stats.q1, stats.median, stats.q3, stats.max
    )
}
