//! Error types for tree mutations.

use thiserror::Error;

use crate::tree::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0:?} does not exist")]
    MissingNode(NodeId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
}
