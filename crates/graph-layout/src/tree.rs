use crate::{Diagram, LayoutEngine, LayoutError, Placements, Point, Size};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Depth-first, left to right tree layout
///
/// Every node gets its not yet placed neighbours in a column to its right.
/// Siblings and disconnected components are stacked vertically. Nodes are
/// visited in the order they are given, so the result depends on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLayout {
    /// Space between a node and the column of its related nodes
    pub horizontal_gap: i32,

    /// Space between two nodes stacked in the same column
    pub vertical_gap: i32,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            horizontal_gap: 60,
            vertical_gap: 10,
        }
    }
}

impl TreeLayout {
    /// Create a new tree layout with the given gaps
    pub fn new(horizontal_gap: i32, vertical_gap: i32) -> Self {
        Self {
            horizontal_gap,
            vertical_gap,
        }
    }
}

/// The nodes of one layout pass, with relationships resolved to indices
struct Arena<N> {
    nodes: Vec<N>,
    sizes: Vec<Size>,
    /// Exported relationships first, then imported ones
    related: Vec<Vec<usize>>,
}

impl<N> Arena<N>
where
    N: Copy + Eq + std::hash::Hash + std::fmt::Debug,
{
    fn resolve<D>(diagram: &D, nodes: &[N]) -> Result<Self, LayoutError<N>>
    where
        D: Diagram<NodeId = N>,
    {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            if index.insert(node, i).is_some() {
                return Err(LayoutError::DuplicateNode(node));
            }
        }

        let mut related = Vec::with_capacity(nodes.len());
        for &node in nodes {
            let model_access = |source| LayoutError::ModelAccess { node, source };
            let exported = diagram.exported(node).map_err(model_access)?;
            let imported = diagram.imported(node).map_err(model_access)?;

            let indices = exported
                .into_iter()
                .chain(imported)
                .map(|other| {
                    index
                        .get(&other)
                        .copied()
                        .ok_or(LayoutError::ForeignNode {
                            node,
                            related: other,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            related.push(indices);
        }

        Ok(Self {
            nodes: nodes.to_vec(),
            sizes: nodes.iter().map(|&node| diagram.size(node)).collect(),
            related,
        })
    }
}

struct Placer<'a, N> {
    arena: &'a Arena<N>,
    layout: TreeLayout,
    placed: Vec<Option<Point>>,
}

/// A column of nodes being placed
struct Column {
    list: Vec<usize>,
    next: usize,
    start: Point,
    cursor: Point,
    /// Node whose related nodes are being placed in the column to the right
    open: Option<usize>,
}

impl Column {
    fn new(list: Vec<usize>, start: Point) -> Self {
        Self {
            list,
            next: 0,
            start,
            cursor: start,
            open: None,
        }
    }
}

impl<N> Placer<'_, N> {
    /// Place `list` in a column starting at `start`, returning the next free
    /// slot of that column
    ///
    /// Related nodes go in a new column to the right of each node. Columns
    /// are kept on an explicit stack, so long relationship chains don't grow
    /// the call stack. Coordinates saturate at the bounds of `i32`.
    fn place(&mut self, list: Vec<usize>, start: Point) -> Point {
        let mut stack = vec![Column::new(list, start)];
        let mut finish = start;

        while let Some(column) = stack.last_mut() {
            let mut node = None;
            while let Some(&i) = column.list.get(column.next) {
                column.next += 1;
                if self.placed[i].is_none() {
                    node = Some(i);
                    break;
                }
            }

            match node {
                Some(i) => {
                    let at = column.cursor;
                    column.open = Some(i);
                    self.placed[i] = Some(at);

                    let related: Vec<usize> = self.arena.related[i]
                        .iter()
                        .copied()
                        .filter(|&other| self.placed[other].is_none())
                        .collect();

                    let width = self.arena.sizes[i].width;
                    let x = at
                        .x
                        .saturating_add(width)
                        .saturating_add(self.layout.horizontal_gap);
                    stack.push(Column::new(related, Point::new(x, at.y)));
                }
                None => {
                    finish = column.cursor;
                    stack.pop();

                    let Some(parent) = stack.last_mut() else {
                        continue;
                    };
                    let Some(i) = parent.open.take() else {
                        continue;
                    };
                    let below = parent
                        .cursor
                        .y
                        .saturating_add(self.arena.sizes[i].height)
                        .saturating_add(self.layout.vertical_gap);
                    parent.cursor = Point::new(parent.start.x, below.max(finish.y));
                }
            }
        }

        finish
    }
}

impl<D: Diagram> LayoutEngine<D> for TreeLayout {
    fn layout(
        &self,
        diagram: &D,
        nodes: &[D::NodeId],
        origin: Point,
    ) -> Result<Placements<D::NodeId>, LayoutError<D::NodeId>> {
        debug!("Tree layout of {} nodes from {origin:?}", nodes.len());

        let arena = Arena::resolve(diagram, nodes)?;
        let mut placer = Placer {
            arena: &arena,
            layout: *self,
            placed: vec![None; nodes.len()],
        };

        let end = placer.place((0..nodes.len()).collect(), origin);
        debug!("Tree layout finished at {end:?}");

        let placements: Placements<_> = arena
            .nodes
            .iter()
            .zip(placer.placed)
            .filter_map(|(&node, pos)| pos.map(|pos| (node, pos)))
            .collect();

        for (node, pos) in &placements {
            trace!("Node {node:?}: old={:?} new={pos:?}", diagram.position(*node));
        }

        Ok(placements)
    }
}
