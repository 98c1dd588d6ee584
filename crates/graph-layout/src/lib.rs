//! Automatic layout of schema diagrams
//!
//! This crate places the tables of a diagram in a left to right tree,
//! following their relationships, and animates the move from the old
//! positions to the new ones. It works with any diagram through the
//! [`Diagram`] trait; [`SchemaDiagram`] is an in-memory implementation
//! backed by petgraph.
//!
//! # Layout Engines
//!
//! - [`TreeLayout`]: depth-first tree layout, related tables to the right
//!
//! # Example
//!
//! ```
//! use tablepen_layout::{LayoutEngine, Point, SchemaDiagram, Size, TreeLayout};
//!
//! // Create a diagram
//! let mut diagram = SchemaDiagram::new();
//! let a = diagram.add_table("a", Point::zero(), Size::new(100, 50));
//! let b = diagram.add_table("b", Point::zero(), Size::new(100, 50));
//! let c = diagram.add_table("c", Point::zero(), Size::new(100, 50));
//! diagram.add_relationship(a, b);
//! diagram.add_relationship(a, c);
//!
//! // Compute the placements only
//! let positions = TreeLayout::default()
//!     .layout(&diagram, &diagram.table_ids(), Point::zero())
//!     .unwrap();
//! assert_eq!(positions[&b], Point::new(160, 0));
//! assert_eq!(positions[&c], Point::new(160, 60));
//!
//! // Or move the tables, see `TreeAutoLayout` for animations
//! let mut layout = tablepen_layout::TreeAutoLayout::new();
//! layout.setup(&diagram, &diagram.table_ids(), Point::zero()).unwrap();
//! layout.done(&mut diagram);
//! ```

mod animation;
mod auto;
mod diagram;
mod engine;
mod error;
mod geometry;
mod schema;
mod settings;
mod tree;

pub use animation::{LayoutRun, DEFAULT_FRAMES};
pub use auto::TreeAutoLayout;
pub use diagram::Diagram;
pub use engine::{LayoutEngine, Placements};
pub use error::{DiagramError, LayoutError, ModelError};
pub use geometry::{Point, Size};
pub use schema::{DiagramSpec, RelationshipSpec, SchemaDiagram, Table, TableId, TableSpec};
pub use settings::LayoutSettings;
pub use tree::TreeLayout;
