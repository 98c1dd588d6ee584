use crate::{Diagram, DiagramError, ModelError, Point, Size};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TableId = NodeIndex;

/// A table as drawn on the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub position: Point,
    pub size: Size,
}

/// Serialized description of a diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSpec {
    pub tables: Vec<TableSpec>,
    #[serde(default)]
    pub relationships: Vec<RelationshipSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    #[serde(default)]
    pub position: Point,
    pub size: Size,
}

/// A foreign key from `fk_table` to the primary key of `pk_table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSpec {
    pub pk_table: String,
    pub fk_table: String,
}

/// In-memory schema diagram
///
/// Relationships are stored as edges from the primary key table to the
/// foreign key table, so a table's outgoing edges are its exported keys and
/// its incoming edges its imported keys.
#[derive(Debug, Clone, Default)]
pub struct SchemaDiagram {
    graph: DiGraph<Table, ()>,
    names: HashMap<String, TableId>,
}

impl SchemaDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a diagram from its serialized description
    ///
    /// # Errors
    /// Returns an error if a table name is defined twice, or if a
    /// relationship refers to a table that isn't defined
    pub fn from_spec(spec: &DiagramSpec) -> Result<Self, DiagramError> {
        let mut diagram = Self::new();

        for table in &spec.tables {
            if diagram.find_table(&table.name).is_some() {
                return Err(DiagramError::DuplicateTable(table.name.clone()));
            }
            diagram.add_table(table.name.clone(), table.position, table.size);
        }

        for rel in &spec.relationships {
            let lookup = |name: &String| {
                diagram
                    .find_table(name)
                    .ok_or_else(|| DiagramError::UnknownTable(name.clone()))
            };
            let pk = lookup(&rel.pk_table)?;
            let fk = lookup(&rel.fk_table)?;
            diagram.add_relationship(pk, fk);
        }

        Ok(diagram)
    }

    pub fn add_table(&mut self, name: impl Into<String>, position: Point, size: Size) -> TableId {
        let name = name.into();
        let id = self.graph.add_node(Table {
            name: name.clone(),
            position,
            size,
        });
        self.names.insert(name, id);
        id
    }

    /// Add a relationship exported by `pk_table` and imported by `fk_table`
    pub fn add_relationship(&mut self, pk_table: TableId, fk_table: TableId) {
        self.graph.add_edge(pk_table, fk_table, ());
    }

    pub fn find_table(&self, name: &str) -> Option<TableId> {
        self.names.get(name).copied()
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.graph.node_weight(id)
    }

    /// All tables, in insertion order
    pub fn table_ids(&self) -> Vec<TableId> {
        self.graph.node_indices().collect()
    }

    fn neighbors(&self, id: TableId, direction: Direction) -> Vec<TableId> {
        // petgraph lists the most recently added edge first
        let mut neighbors: Vec<_> = self.graph.neighbors_directed(id, direction).collect();
        neighbors.reverse();
        neighbors
    }
}

impl Diagram for SchemaDiagram {
    type NodeId = TableId;

    fn position(&self, node: TableId) -> Point {
        self.graph[node].position
    }

    fn size(&self, node: TableId) -> Size {
        self.graph[node].size
    }

    fn set_position(&mut self, node: TableId, position: Point) {
        self.graph[node].position = position;
    }

    fn exported(&self, node: TableId) -> Result<Vec<TableId>, ModelError> {
        Ok(self.neighbors(node, Direction::Outgoing))
    }

    fn imported(&self, node: TableId) -> Result<Vec<TableId>, ModelError> {
        Ok(self.neighbors(node, Direction::Incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn spec(tables: &[&str], relationships: &[(&str, &str)]) -> DiagramSpec {
        DiagramSpec {
            tables: tables
                .iter()
                .map(|name| TableSpec {
                    name: name.to_string(),
                    position: Point::zero(),
                    size: Size::new(100, 50),
                })
                .collect(),
            relationships: relationships
                .iter()
                .map(|(pk, fk)| RelationshipSpec {
                    pk_table: pk.to_string(),
                    fk_table: fk.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn relationships_keep_insertion_order() {
        let diagram = SchemaDiagram::from_spec(&spec(
            &["customer", "order", "invoice", "address"],
            &[
                ("customer", "order"),
                ("customer", "invoice"),
                ("address", "customer"),
            ],
        ))
        .unwrap();

        let id = |name| diagram.find_table(name).unwrap();

        assert_eq!(
            diagram.exported(id("customer")).unwrap(),
            vec![id("order"), id("invoice")]
        );
        assert_eq!(diagram.imported(id("customer")).unwrap(), vec![id("address")]);
        assert_eq!(diagram.imported(id("order")).unwrap(), vec![id("customer")]);
        assert!(diagram.exported(id("order")).unwrap().is_empty());
    }

    #[test]
    fn parallel_relationships_are_kept() {
        let mut diagram = SchemaDiagram::new();
        let a = diagram.add_table("a", Point::zero(), Size::new(10, 10));
        let b = diagram.add_table("b", Point::zero(), Size::new(10, 10));
        diagram.add_relationship(a, b);
        diagram.add_relationship(a, b);

        assert_eq!(diagram.exported(a).unwrap(), vec![b, b]);
    }

    #[test]
    fn unknown_table_is_rejected() {
        let err = SchemaDiagram::from_spec(&spec(&["a"], &[("a", "missing")])).unwrap_err();
        assert_eq!(err, DiagramError::UnknownTable("missing".to_string()));
    }

    #[test]
    fn duplicate_table_is_rejected() {
        let err = SchemaDiagram::from_spec(&spec(&["a", "a"], &[])).unwrap_err();
        assert_eq!(err, DiagramError::DuplicateTable("a".to_string()));
    }

    #[test]
    fn spec_deserializes_from_ron() {
        let text = r#"(
            tables: [
                (name: "parent", size: (width: 120, height: 80)),
                (name: "child", position: (x: 5, y: 7), size: (width: 90, height: 40)),
            ],
            relationships: [(pk_table: "parent", fk_table: "child")],
        )"#;

        let spec: DiagramSpec = ron::from_str(text).unwrap();
        let diagram = SchemaDiagram::from_spec(&spec).unwrap();
        let child = diagram.find_table("child").unwrap();

        assert_eq!(diagram.position(child), Point::new(5, 7));
        assert_eq!(diagram.size(child), Size::new(90, 40));
        assert_eq!(diagram.table_ids().len(), 2);
    }
}
