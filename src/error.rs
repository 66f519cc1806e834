use thiserror::Error;

use crate::input::InputError;
use crate::model::params::ParamError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
