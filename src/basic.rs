//! Reference record types built on the consumer traits in [crate::codec].
//!
//! They keep properties as a generic JSON object; applications usually define their own records
//! with typed property fields instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

use crate::{
    codec::{
        scan_entity, scan_path, EntityConsumer, PathConsumer, PathElement, PropertySink, Source,
    },
    error::ScanError,
    properties::{EdgeCore, EntityCore, EntityKind, GraphId, VertexCore},
};

fn write_properties(f: &mut Formatter<'_>, properties: &Map<String, Value>) -> std::fmt::Result {
    let json = serde_json::to_string(properties).map_err(|_| std::fmt::Error)?;
    write!(f, "{json}")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicVertex {
    pub valid: bool,
    pub id: GraphId,
    pub label: String,
    pub properties: Map<String, Value>,
}

impl BasicVertex {
    pub fn scan<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<(), ScanError> {
        scan_entity(source, self)
    }
}

impl EntityConsumer for BasicVertex {
    const KIND: EntityKind = EntityKind::Vertex;

    fn save_entity(&mut self, core: Option<EntityCore>) -> Result<(), ScanError> {
        let Some(core) = core else {
            self.valid = false;
            return Ok(());
        };
        let VertexCore { id, label } = core.try_into()?;
        self.valid = true;
        self.id = id;
        self.label = label;
        Ok(())
    }

    fn property_sink(&mut self) -> PropertySink<'_> {
        PropertySink::Structural(&mut self.properties)
    }
}

impl Display for BasicVertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "NULL");
        }
        write!(f, "{}[{}]", self.label, self.id)?;
        write_properties(f, &self.properties)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicEdge {
    pub valid: bool,
    pub id: GraphId,
    pub label: String,
    pub start: GraphId,
    pub end: GraphId,
    pub properties: Map<String, Value>,
}

impl BasicEdge {
    pub fn scan<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<(), ScanError> {
        scan_entity(source, self)
    }
}

impl EntityConsumer for BasicEdge {
    const KIND: EntityKind = EntityKind::Edge;

    fn save_entity(&mut self, core: Option<EntityCore>) -> Result<(), ScanError> {
        let Some(core) = core else {
            self.valid = false;
            return Ok(());
        };
        let EdgeCore {
            id,
            label,
            start,
            end,
        } = core.try_into()?;
        self.valid = true;
        self.id = id;
        self.label = label;
        self.start = start;
        self.end = end;
        Ok(())
    }

    fn property_sink(&mut self) -> PropertySink<'_> {
        PropertySink::Structural(&mut self.properties)
    }
}

impl Display for BasicEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "NULL");
        }
        write!(f, "{}[{}][{},{}]", self.label, self.id, self.start, self.end)?;
        write_properties(f, &self.properties)
    }
}

/// A path assembled from its elements: `vertices.len() == edges.len() + 1` unless empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicPath {
    pub valid: bool,
    pub vertices: Vec<BasicVertex>,
    pub edges: Vec<BasicEdge>,
}

impl BasicPath {
    pub fn scan<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<(), ScanError> {
        scan_path(source, self)
    }
}

impl PathConsumer for BasicPath {
    fn save_path(&mut self, elements: Option<Vec<PathElement<'_>>>) -> Result<(), ScanError> {
        self.valid = elements.is_some();
        self.vertices.clear();
        self.edges.clear();
        let Some(elements) = elements else {
            return Ok(());
        };

        let ne = elements.len() / 2;
        self.vertices.reserve(ne + 1);
        self.edges.reserve(ne);
        let mut elements = elements.into_iter();
        while let Some(element) = elements.next() {
            let mut vertex = BasicVertex::default();
            vertex.scan(element)?;
            self.vertices.push(vertex);

            if let Some(element) = elements.next() {
                let mut edge = BasicEdge::default();
                edge.scan(element)?;
                self.edges.push(edge);
            }
        }
        Ok(())
    }
}

impl Display for BasicPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "NULL");
        }
        write!(f, "[")?;
        for (idx, vertex) in self.vertices.iter().enumerate() {
            if let Some(edge) = idx.checked_sub(1).and_then(|e| self.edges.get(e)) {
                write!(f, ",{edge},")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "]")
    }
}
