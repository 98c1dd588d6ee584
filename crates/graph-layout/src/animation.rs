use crate::{Diagram, Placements, Point};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Default number of frames used to animate a layout
pub const DEFAULT_FRAMES: u32 = 50;

/// Moves nodes from where they were to where a layout placed them
///
/// The frame counter never goes past `total_frames`. A run with zero frames
/// is done as soon as it is created, and only [`LayoutRun::done`] moves its
/// nodes.
#[derive(Debug, Clone)]
pub struct LayoutRun<N> {
    /// Nodes in layout order, so updates are reported deterministically
    nodes: Vec<N>,
    original: HashMap<N, Point>,
    placements: Placements<N>,
    frame: u32,
    total_frames: u32,
}

impl<N> LayoutRun<N>
where
    N: Copy + Eq + Hash + fmt::Debug,
{
    /// Capture the current position of every placed node
    pub fn new<D>(diagram: &D, placements: Placements<N>, nodes: &[N], total_frames: u32) -> Self
    where
        D: Diagram<NodeId = N>,
    {
        let nodes: Vec<N> = nodes
            .iter()
            .copied()
            .filter(|node| placements.contains_key(node))
            .collect();
        let original = nodes
            .iter()
            .map(|&node| (node, diagram.position(node)))
            .collect();

        Self {
            nodes,
            original,
            placements,
            frame: 0,
            total_frames,
        }
    }

    /// Target position of every node
    pub fn placements(&self) -> &Placements<N> {
        &self.placements
    }

    /// Positions the nodes had when the run was created
    pub fn original_positions(&self) -> &HashMap<N, Point> {
        &self.original
    }

    /// Number of frames played so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Number of frames the animation lasts
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Whether every frame has been played
    pub fn is_done(&self) -> bool {
        self.frame >= self.total_frames
    }

    /// Fraction of the animation that has been played, between 0 and 1
    pub fn progress(&self) -> f64 {
        if self.total_frames == 0 {
            return 1.0;
        }
        f64::from(self.frame) / f64::from(self.total_frames)
    }

    /// Play one frame, returning the nodes that were moved
    ///
    /// Once the run is done this is a no-op and returns no nodes.
    pub fn next_frame<D>(&mut self, diagram: &mut D) -> Vec<N>
    where
        D: Diagram<NodeId = N>,
    {
        if self.is_done() {
            return Vec::new();
        }

        self.frame += 1;
        let progress = self.progress();
        trace!("Layout frame {}/{} ({progress})", self.frame, self.total_frames);

        for node in &self.nodes {
            let pos = self.original[node].lerp(self.placements[node], progress);
            diagram.set_position(*node, pos);
        }

        self.nodes.clone()
    }

    /// Move every node to its final position and end the animation
    pub fn done<D>(&mut self, diagram: &mut D)
    where
        D: Diagram<NodeId = N>,
    {
        for node in &self.nodes {
            diagram.set_position(*node, self.placements[node]);
        }
        self.frame = self.total_frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SchemaDiagram, Size, TableId};
    use test_log::test;

    fn single(from: Point, to: Point, frames: u32) -> (SchemaDiagram, TableId, LayoutRun<TableId>) {
        let mut diagram = SchemaDiagram::new();
        let table = diagram.add_table("t", from, Size::new(100, 50));
        let placements = Placements::from([(table, to)]);
        let run = LayoutRun::new(&diagram, placements, &[table], frames);
        (diagram, table, run)
    }

    #[test]
    fn reaches_target_on_last_frame() {
        let (mut diagram, table, mut run) = single(Point::zero(), Point::new(100, 50), DEFAULT_FRAMES);

        for _ in 0..DEFAULT_FRAMES - 1 {
            assert!(!run.is_done());
            assert_eq!(run.next_frame(&mut diagram), vec![table]);
        }
        assert!(!run.is_done());
        run.next_frame(&mut diagram);

        assert!(run.is_done());
        assert_eq!(diagram.position(table), Point::new(100, 50));
    }

    #[test]
    fn intermediate_frames_are_interpolated() {
        let (mut diagram, table, mut run) = single(Point::new(10, 10), Point::new(110, 60), 4);

        run.next_frame(&mut diagram);
        assert_eq!(diagram.position(table), Point::new(35, 22));
        run.next_frame(&mut diagram);
        assert_eq!(diagram.position(table), Point::new(60, 35));
        assert_eq!(run.progress(), 0.5);
    }

    #[test]
    fn frame_counter_is_clamped() {
        let (mut diagram, table, mut run) = single(Point::zero(), Point::new(30, 30), 3);

        for _ in 0..10 {
            run.next_frame(&mut diagram);
        }

        assert_eq!(run.frame(), 3);
        assert_eq!(diagram.position(table), Point::new(30, 30));
        assert!(run.next_frame(&mut diagram).is_empty());
    }

    #[test]
    fn done_snaps_and_is_idempotent() {
        let (mut diagram, table, mut run) = single(Point::new(-40, 8), Point::new(100, 50), 10);
        run.next_frame(&mut diagram);

        run.done(&mut diagram);
        assert!(run.is_done());
        assert_eq!(diagram.position(table), Point::new(100, 50));

        run.done(&mut diagram);
        assert_eq!(run.frame(), 10);
        assert_eq!(diagram.position(table), Point::new(100, 50));
    }

    #[test]
    fn zero_frames_is_done_immediately() {
        let (mut diagram, table, mut run) = single(Point::zero(), Point::new(5, 5), 0);

        assert!(run.is_done());
        assert_eq!(run.progress(), 1.0);
        assert!(run.next_frame(&mut diagram).is_empty());
        assert_eq!(diagram.position(table), Point::zero());

        run.done(&mut diagram);
        assert_eq!(diagram.position(table), Point::new(5, 5));
    }

    #[test]
    fn original_positions_are_captured() {
        let (mut diagram, table, mut run) = single(Point::new(3, 4), Point::new(9, 9), 2);
        run.done(&mut diagram);

        assert_eq!(run.original_positions()[&table], Point::new(3, 4));
        assert_eq!(run.placements()[&table], Point::new(9, 9));
    }
}
