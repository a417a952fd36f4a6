//! Error management.

use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "malformed input: {}", _0)]
    MalformedInput(String),
    #[display(
        fmt = "vertex count mismatch: declared {}, observed {}",
        declared,
        observed
    )]
    VertexCountMismatch { declared: usize, observed: usize },
    #[display(
        fmt = "disconnected graph: spanned {} of {} vertices",
        spanned,
        expected
    )]
    DisconnectedGraph { spanned: usize, expected: usize },
    #[display(fmt = "invalid edge: {}", _0)]
    InvalidEdge(String),
    #[display(fmt = "duplicate vertex {}", _0)]
    DuplicateVertex(VId),
    #[display(fmt = "unknown root vertex {}", _0)]
    UnknownRoot(VId),
    CostOverflow,
    #[display(fmt = "io: {}", _0)]
    Io(String),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
