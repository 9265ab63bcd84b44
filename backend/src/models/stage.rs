use thiserror::Error;

use super::{AddressQuery, AnalysisReport};
use crate::error::AppError;

/// Lifecycle of one address lookup: idle -> loading -> results | error.
#[derive(Debug, Clone, Default)]
pub enum AnalysisStage {
    #[default]
    Idle,
    Loading(AddressQuery),
    Results(Box<AnalysisReport>),
    Error { query: AddressQuery, error: AppError },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {action} while {stage}")]
pub struct InvalidTransition {
    pub stage: &'static str,
    pub action: &'static str,
}

impl AnalysisStage {
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisStage::Idle => "idle",
            AnalysisStage::Loading(_) => "loading",
            AnalysisStage::Results(_) => "results",
            AnalysisStage::Error { .. } => "error",
        }
    }

    fn invalid(&self, action: &'static str) -> InvalidTransition {
        InvalidTransition {
            stage: self.name(),
            action,
        }
    }

    /// Begin a new lookup. Allowed from any stage except while one is in flight.
    pub fn start(&self, query: AddressQuery) -> Result<AnalysisStage, InvalidTransition> {
        match self {
            AnalysisStage::Loading(_) => Err(self.invalid("start")),
            _ => Ok(AnalysisStage::Loading(query)),
        }
    }

    /// Record the outcome of the in-flight lookup.
    pub fn finish(&self, outcome: Result<AnalysisReport, AppError>) -> Result<AnalysisStage, InvalidTransition> {
        match self {
            AnalysisStage::Loading(query) => Ok(match outcome {
                Ok(report) => AnalysisStage::Results(Box::new(report)),
                Err(error) => AnalysisStage::Error {
                    query: query.clone(),
                    error,
                },
            }),
            _ => Err(self.invalid("finish")),
        }
    }

    /// Restart a failed lookup from scratch. Unsupported networks are terminal.
    pub fn retry(&self) -> Result<AnalysisStage, InvalidTransition> {
        match self {
            AnalysisStage::Error { query, error } if error.is_retryable() => {
                Ok(AnalysisStage::Loading(query.clone()))
            }
            _ => Err(self.invalid("retry")),
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, AnalysisStage::Error { error, .. } if error.is_retryable())
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisStage::Results(report) => Some(report.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            AnalysisStage::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}
