use crate::model::rule::CandidateRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleOrder {
    /// Rules fixing the most students first.
    FixCount,
    /// Rules touching the fewest categories first.
    CategoryCount,
}

impl RuleOrder {
    pub fn name(self) -> &'static str {
        match self {
            RuleOrder::FixCount => "fix-count",
            RuleOrder::CategoryCount => "category-count",
        }
    }
}

pub fn by_fix_count_desc(rules: &[CandidateRule]) -> Vec<CandidateRule> {
    let mut out = rules.to_vec();
    out.sort_by(|a, b| b.fix_count.cmp(&a.fix_count));
    out
}

pub fn by_category_count_asc(rules: &[CandidateRule]) -> Vec<CandidateRule> {
    let mut out = rules.to_vec();
    out.sort_by_key(|r| r.category_count);
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage8_rank.rs"]
mod tests;
