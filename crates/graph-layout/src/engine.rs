use crate::{Diagram, LayoutError, Point};
use std::collections::HashMap;

/// Target positions computed by one layout pass
pub type Placements<N> = HashMap<N, Point>;

/// A layout engine that can compute positions for diagram nodes
///
/// Engines only compute placements. Moving the nodes, with or without
/// animation, is left to [`LayoutRun`](crate::LayoutRun).
pub trait LayoutEngine<D: Diagram> {
    /// Compute a position for every node in `nodes`, starting at `origin`
    ///
    /// # Errors
    /// Returns an error if the diagram can't report the relationships of a
    /// node, or if the nodes and their relationships don't form a closed set
    fn layout(
        &self,
        diagram: &D,
        nodes: &[D::NodeId],
        origin: Point,
    ) -> Result<Placements<D::NodeId>, LayoutError<D::NodeId>>;
}
