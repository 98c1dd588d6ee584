use crate::{
    Diagram, LayoutEngine, LayoutError, LayoutRun, LayoutSettings, Placements, Point, TreeLayout,
    DEFAULT_FRAMES,
};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Tree layout of a diagram, applied at once or animated frame by frame
///
/// ```
/// use tablepen_layout::{Diagram, Point, SchemaDiagram, Size, TreeAutoLayout};
///
/// let mut diagram = SchemaDiagram::new();
/// let customer = diagram.add_table("customer", Point::new(300, 300), Size::new(100, 50));
/// let order = diagram.add_table("order", Point::new(10, 400), Size::new(100, 50));
/// diagram.add_relationship(customer, order);
///
/// let mut layout = TreeAutoLayout::new();
/// layout.setup(&diagram, &diagram.table_ids(), Point::zero()).unwrap();
/// while !layout.is_done() {
///     let _moved = layout.next_frame(&mut diagram);
/// }
///
/// assert_eq!(diagram.position(order), Point::new(160, 0));
/// ```
#[derive(Debug, Clone)]
pub struct TreeAutoLayout<N> {
    engine: TreeLayout,
    animation_enabled: bool,
    num_frames_in_anim: u32,
    run: Option<LayoutRun<N>>,
}

impl<N> Default for TreeAutoLayout<N> {
    fn default() -> Self {
        Self {
            engine: TreeLayout::default(),
            animation_enabled: true,
            num_frames_in_anim: DEFAULT_FRAMES,
            run: None,
        }
    }
}

impl<N> TreeAutoLayout<N>
where
    N: Copy + Eq + Hash + fmt::Debug,
{
    /// Create a layout with the default gaps and a 50 frame animation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &LayoutSettings) -> Self {
        Self {
            engine: settings.tree_layout(),
            animation_enabled: settings.animation_enabled,
            num_frames_in_anim: settings.num_frames_in_anim,
            run: None,
        }
    }

    /// Compute new positions for `nodes` and prepare the animation towards them
    ///
    /// Nodes are not moved until [`Self::next_frame`] or [`Self::done`] is
    /// called. The number of frames is read at this point; changing it
    /// afterwards only affects the next setup.
    ///
    /// # Errors
    /// Returns an error if the layout can't be computed, in which case any
    /// previous run is discarded
    pub fn setup<D>(&mut self, diagram: &D, nodes: &[N], origin: Point) -> Result<(), LayoutError<N>>
    where
        D: Diagram<NodeId = N>,
    {
        self.run = None;

        let placements = self.engine.layout(diagram, nodes, origin)?;
        debug!(
            "Layout ready for {} nodes over {} frames",
            placements.len(),
            self.num_frames_in_anim
        );

        self.run = Some(LayoutRun::new(
            diagram,
            placements,
            nodes,
            self.num_frames_in_anim,
        ));
        Ok(())
    }

    /// Set up a layout, and apply it immediately unless it has to be animated
    ///
    /// Returns `true` if frames remain to be played with [`Self::next_frame`].
    ///
    /// # Errors
    /// Same as [`Self::setup`]
    pub fn run<D>(&mut self, diagram: &mut D, nodes: &[N], origin: Point) -> Result<bool, LayoutError<N>>
    where
        D: Diagram<NodeId = N>,
    {
        self.setup(diagram, nodes, origin)?;

        if !self.animation_enabled || self.is_done() {
            self.done(diagram);
            return Ok(false);
        }
        Ok(true)
    }

    /// Move every node to its final position
    pub fn done<D>(&mut self, diagram: &mut D)
    where
        D: Diagram<NodeId = N>,
    {
        if let Some(run) = &mut self.run {
            run.done(diagram);
        }
    }

    /// Whether the animation has played all its frames
    ///
    /// Always true when no layout was set up.
    pub fn is_done(&self) -> bool {
        self.run.as_ref().map_or(true, LayoutRun::is_done)
    }

    /// Play one animation frame, returning the nodes that need to be redrawn
    pub fn next_frame<D>(&mut self, diagram: &mut D) -> Vec<N>
    where
        D: Diagram<NodeId = N>,
    {
        match &mut self.run {
            Some(run) => run.next_frame(diagram),
            None => Vec::new(),
        }
    }

    /// Fraction of the current animation that has been played
    pub fn progress(&self) -> f64 {
        self.run.as_ref().map_or(1.0, LayoutRun::progress)
    }

    /// Positions computed by the last successful setup
    pub fn placements(&self) -> Option<&Placements<N>> {
        self.run.as_ref().map(LayoutRun::placements)
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn set_animation_enabled(&mut self, animation_enabled: bool) {
        self.animation_enabled = animation_enabled;
    }

    pub fn num_frames_in_anim(&self) -> u32 {
        self.num_frames_in_anim
    }

    pub fn set_num_frames_in_anim(&mut self, num_frames_in_anim: u32) {
        self.num_frames_in_anim = num_frames_in_anim;
    }

    /// Engine used by the next setup
    pub fn tree_layout(&self) -> TreeLayout {
        self.engine
    }

    pub fn set_tree_layout(&mut self, engine: TreeLayout) {
        self.engine = engine;
    }
}
