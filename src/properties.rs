//! [crate::properties] contains the identifier and metadata types produced when decoding vertex
//! and edge literals.
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::ScanError;

/// Graph ID
///
/// The composite identifier of a vertex or edge: a catalog component naming the label the entity
/// was created under, and a local sequence number within that catalog. Written as
/// `<catalog>.<local>`, e.g. `3.1`.
///
/// Graph IDs only compare for equality; the numeric components carry no ordering meaning here.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphId {
    catalog: u64,
    local: u64,
}

impl GraphId {
    pub const fn new(catalog: u64, local: u64) -> Self {
        GraphId { catalog, local }
    }

    pub fn catalog(&self) -> u64 {
        self.catalog
    }

    pub fn local(&self) -> u64 {
        self.local
    }
}

fn parse_component(digits: &[u8], whole: &[u8]) -> Result<u64, ScanError> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ScanError::MalformedIdentifier(format!(
            "'{}' is not <digits>.<digits>",
            String::from_utf8_lossy(whole)
        )));
    }
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(d - b'0')))
            .ok_or_else(|| {
                ScanError::MalformedIdentifier(format!(
                    "'{}' overflows a 64 bit component",
                    String::from_utf8_lossy(whole)
                ))
            })
    })
}

impl TryFrom<&[u8]> for GraphId {
    type Error = ScanError;

    fn try_from(blob: &[u8]) -> Result<Self, Self::Error> {
        let sep = blob.iter().position(|b| *b == b'.').ok_or_else(|| {
            ScanError::MalformedIdentifier(format!(
                "'{}' has no '.' separator",
                String::from_utf8_lossy(blob)
            ))
        })?;
        Ok(GraphId {
            catalog: parse_component(&blob[..sep], blob)?,
            local: parse_component(&blob[sep + 1..], blob)?,
        })
    }
}

impl TryFrom<&str> for GraphId {
    type Error = ScanError;

    fn try_from(string: &str) -> Result<Self, Self::Error> {
        GraphId::try_from(string.as_bytes())
    }
}

impl TryFrom<String> for GraphId {
    type Error = ScanError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        GraphId::try_from(string.as_bytes())
    }
}

impl FromStr for GraphId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphId::try_from(s)
    }
}

impl Display for GraphId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.catalog, self.local)
    }
}

impl From<GraphId> for String {
    fn from(val: GraphId) -> Self {
        format!("{val}")
    }
}

/// Which literal grammar applies at a given position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vertex,
    Edge,
}

impl EntityKind {
    /// The kind expected at the next position of a path.
    pub fn next(self) -> Self {
        match self {
            EntityKind::Vertex => EntityKind::Edge,
            EntityKind::Edge => EntityKind::Vertex,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Vertex => write!(f, "vertex"),
            EntityKind::Edge => write!(f, "edge"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexCore {
    pub id: GraphId,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCore {
    pub id: GraphId,
    pub label: String,
    pub start: GraphId,
    pub end: GraphId,
}

/// Metadata of one decoded entity, handed to [crate::codec::EntityConsumer::save_entity].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCore {
    Vertex(VertexCore),
    Edge(EdgeCore),
}

impl EntityCore {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityCore::Vertex(_) => EntityKind::Vertex,
            EntityCore::Edge(_) => EntityKind::Edge,
        }
    }

    pub fn id(&self) -> GraphId {
        match self {
            EntityCore::Vertex(core) => core.id,
            EntityCore::Edge(core) => core.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EntityCore::Vertex(core) => &core.label,
            EntityCore::Edge(core) => &core.label,
        }
    }
}

impl TryFrom<EntityCore> for VertexCore {
    type Error = ScanError;

    fn try_from(core: EntityCore) -> Result<Self, Self::Error> {
        match core {
            EntityCore::Vertex(vertex) => Ok(vertex),
            EntityCore::Edge(edge) => Err(ScanError::Consumer(format!(
                "expected vertex metadata, found edge {}[{}]",
                edge.label, edge.id
            ))),
        }
    }
}

impl TryFrom<EntityCore> for EdgeCore {
    type Error = ScanError;

    fn try_from(core: EntityCore) -> Result<Self, Self::Error> {
        match core {
            EntityCore::Edge(edge) => Ok(edge),
            EntityCore::Vertex(vertex) => Err(ScanError::Consumer(format!(
                "expected edge metadata, found vertex {}[{}]",
                vertex.label, vertex.id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_id_parses_canonical_form() {
        let id: GraphId = "3.12".parse().unwrap();
        assert_eq!(id, GraphId::new(3, 12));
        assert_eq!(id.to_string(), "3.12");
        assert_eq!("007.0".parse::<GraphId>().unwrap(), GraphId::new(7, 0));
    }

    #[test]
    fn graph_id_rejects_deviations() {
        for bad in ["", ".", "3", "3.", ".1", "+3.1", "3.-1", "3.1.2", "a.1", "3 .1", "3.1 "] {
            assert!(
                matches!(bad.parse::<GraphId>(), Err(ScanError::MalformedIdentifier(_))),
                "accepted {bad:?}"
            );
        }
        assert!("18446744073709551616.1".parse::<GraphId>().is_err());
        assert!("18446744073709551615.1".parse::<GraphId>().is_ok());
    }

    #[test]
    fn graph_id_serializes_as_string() {
        let id = GraphId::new(4, 2);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4.2\"");
        assert_eq!(serde_json::from_str::<GraphId>("\"4.2\"").unwrap(), id);
        assert!(serde_json::from_str::<GraphId>("\"4\"").is_err());
    }

    #[test]
    fn core_conversion_checks_kind() {
        let vertex = EntityCore::Vertex(VertexCore {
            id: GraphId::new(1, 1),
            label: "person".to_string(),
        });
        assert_eq!(vertex.kind(), EntityKind::Vertex);
        assert!(matches!(
            EdgeCore::try_from(vertex.clone()),
            Err(ScanError::Consumer(_))
        ));
        assert_eq!(VertexCore::try_from(vertex).unwrap().label, "person");
    }
}
