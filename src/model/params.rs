use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Alignment {
    /// Pair the i-th lowest score with the i-th lowest reference value.
    Rank,
    /// Pair scores and reference values by input position.
    Positional,
}

impl Alignment {
    pub fn name(self) -> &'static str {
        match self {
            Alignment::Rank => "rank",
            Alignment::Positional => "positional",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandShiftParams {
    /// Minimum |score - reference| for a student to be analysed.
    pub variance: f64,
    /// Maximum |sumDiff - diff| for a combination to be accepted.
    pub threshold: f64,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("invalid parameter: {name} must be a finite value > 0 (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl BandShiftParams {
    pub fn default_v1() -> Self {
        Self {
            variance: 10.0,
            threshold: 5.0,
            alignment: Alignment::Rank,
        }
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("variance", self.variance)?;
        check_positive("threshold", self.threshold)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::InvalidParameter { name, value })
    }
}
