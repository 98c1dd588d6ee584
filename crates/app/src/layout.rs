use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tablepen_layout::{Diagram, DiagramSpec, LayoutSettings, Point, SchemaDiagram, TreeAutoLayout};
use tracing::debug;

/// Final position of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

pub fn load_diagram(path: &Path) -> Result<SchemaDiagram> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read diagram {}", path.display()))?;
    let spec: DiagramSpec = ron::from_str(&text)
        .with_context(|| format!("Failed to parse diagram {}", path.display()))?;
    SchemaDiagram::from_spec(&spec).with_context(|| format!("Invalid diagram {}", path.display()))
}

pub fn load_settings(path: &Path) -> Result<LayoutSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("Failed to parse settings {}", path.display()))
}

/// Lay out every table of the diagram, playing the animation if enabled
pub fn lay_out(
    diagram: &mut SchemaDiagram,
    settings: &LayoutSettings,
    origin: Point,
) -> Result<Vec<Placement>> {
    let tables = diagram.table_ids();
    let mut layout = TreeAutoLayout::with_settings(settings);

    if layout
        .run(diagram, &tables, origin)
        .context("Failed to lay out diagram")?
    {
        while !layout.is_done() {
            let moved = layout.next_frame(diagram);
            debug!(
                "Frame {:.0}%: moved {} tables",
                layout.progress() * 100.0,
                moved.len()
            );
        }
    }

    Ok(tables
        .into_iter()
        .filter_map(|id| {
            let table = diagram.table(id)?;
            let position = diagram.position(id);
            Some(Placement {
                name: table.name.clone(),
                x: position.x,
                y: position.y,
            })
        })
        .collect())
}
