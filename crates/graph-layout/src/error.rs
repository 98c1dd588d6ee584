use std::fmt;
use thiserror::Error;

/// Boxed error reported by a [`Diagram`](crate::Diagram) implementation
pub type ModelError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while computing a layout
#[derive(Debug, Error)]
pub enum LayoutError<N>
where
    N: fmt::Debug,
{
    /// The diagram could not report the relationships of a node
    #[error("could not read the relationships of node {node:?}")]
    ModelAccess {
        node: N,
        #[source]
        source: ModelError,
    },

    /// A relationship points at a node that is not part of the layout
    #[error("node {node:?} is related to {related:?}, which is not part of the layout")]
    ForeignNode { node: N, related: N },

    /// The same node was passed to the layout more than once
    #[error("node {0:?} appears more than once in the layout")]
    DuplicateNode(N),
}

/// Errors raised while building a [`SchemaDiagram`](crate::SchemaDiagram)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("relationship refers to unknown table {0:?}")]
    UnknownTable(String),

    #[error("table {0:?} is defined more than once")]
    DuplicateTable(String),
}
