//! Graph-subsystem error types.

use thiserror::Error;

use resq_core::{CoreError, NodeId};

/// Errors produced while constructing a dispatch graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no facility records to resolve against")]
    NoFacilities,

    #[error("actor position was not supplied")]
    MissingActor,

    #[error("duplicate node label {0:?}")]
    DuplicateLabel(String),

    #[error(transparent)]
    Coordinate(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Fatal search failures.
///
/// An unreachable target is *not* an error — `PathSearch` reports it as
/// `Ok(None)`.  This enum covers invariant violations only: a graph whose
/// weights break the search's assumptions must not yield a result at all.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("edge {from} -> {to} has unsound weight {weight}")]
    CorruptWeight { from: NodeId, to: NodeId, weight: f64 },
}
