use crate::{ModelError, Point, Size};
use std::fmt;
use std::hash::Hash;

/// The diagram whose nodes are being laid out
///
/// Nodes are owned by the diagram. Layouts only read their size and
/// relationships, and write their position.
pub trait Diagram {
    /// The type used to identify nodes in the diagram
    type NodeId: Copy + Eq + Hash + fmt::Debug;

    /// Current position of a node
    fn position(&self, node: Self::NodeId) -> Point;

    /// Current size of a node
    fn size(&self, node: Self::NodeId) -> Size;

    /// Move a node
    fn set_position(&mut self, node: Self::NodeId, position: Point);

    /// Nodes referencing this one, in relationship order
    ///
    /// # Errors
    /// Returns an error if the underlying model can't be queried
    fn exported(&self, node: Self::NodeId) -> Result<Vec<Self::NodeId>, ModelError>;

    /// Nodes this one references, in relationship order
    ///
    /// # Errors
    /// Returns an error if the underlying model can't be queried
    fn imported(&self, node: Self::NodeId) -> Result<Vec<Self::NodeId>, ModelError>;
}
