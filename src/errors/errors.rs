use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::FileWrite { .. } => "FileWrite",
            ErrorImpl::IncludeCycle { .. } => "IncludeCycle",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileRead { file } => ErrorTip::Suggestion(format!(
                "Unable to open `{}`, is the path relative to the working directory?",
                file
            )),
            ErrorImpl::FileWrite { file } => {
                ErrorTip::Suggestion(format!("Unable to write results to `{}`", file))
            }
            ErrorImpl::IncludeCycle { file } => ErrorTip::Suggestion(format!(
                "`{}` is included while it is still being included",
                file
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unable to open file {file:?}")]
    FileRead { file: String },
    #[error("unable to write results to {file:?}")]
    FileWrite { file: String },
    #[error("inclusion cycle through {file:?}")]
    IncludeCycle { file: String },
}
