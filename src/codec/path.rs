//! Lexer for path literals.
//!
//! ```text
//! path_lit := "NULL" | "[" [ element { "," element } ] "]"
//! ```
//!
//! Elements alternate vertex, edge, vertex, ... starting with a vertex, so a path holding `k`
//! edges always holds `2k + 1` elements.

use crate::{
    codec::entity::{lex_entity, DecodedEntity, NULL_LITERAL},
    config::ScanConfig,
    error::ScanError,
    properties::EntityKind,
};

/// One position of a lexed path.
///
/// Elements are handed back to [crate::codec::scan_entity] (via
/// [crate::codec::Source::Element]) to materialize them into a concrete record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathElement<'a> {
    Null,
    Vertex(DecodedEntity<'a>),
    Edge(DecodedEntity<'a>),
}

impl<'a> PathElement<'a> {
    fn lexed(kind: EntityKind, entity: Option<DecodedEntity<'a>>) -> Self {
        match (kind, entity) {
            (_, None) => PathElement::Null,
            (EntityKind::Vertex, Some(entity)) => PathElement::Vertex(entity),
            (EntityKind::Edge, Some(entity)) => PathElement::Edge(entity),
        }
    }

    pub fn entity(&self) -> Option<&DecodedEntity<'a>> {
        match self {
            PathElement::Null => None,
            PathElement::Vertex(entity) | PathElement::Edge(entity) => Some(entity),
        }
    }

    /// The raw property text of a non-null element.
    pub fn properties(&self) -> Option<&[u8]> {
        self.entity().map(|entity| entity.properties.as_ref())
    }

    pub fn into_entity(self) -> Option<DecodedEntity<'a>> {
        match self {
            PathElement::Null => None,
            PathElement::Vertex(entity) | PathElement::Edge(entity) => Some(entity),
        }
    }

    pub fn into_owned(self) -> PathElement<'static> {
        match self {
            PathElement::Null => PathElement::Null,
            PathElement::Vertex(entity) => PathElement::Vertex(entity.into_owned()),
            PathElement::Edge(entity) => PathElement::Edge(entity.into_owned()),
        }
    }
}

fn malformed(b: &[u8], what: String) -> ScanError {
    ScanError::MalformedPath(format!("{what}: '{}'", String::from_utf8_lossy(b)))
}

/// Lex one path starting at `start`.
///
/// Returns the number of bytes consumed and the elements, or `None` for the null sentinel. `[]`
/// is a valid path with no elements.
pub fn lex_path<'a>(
    b: &'a [u8],
    start: usize,
    config: &ScanConfig,
) -> Result<(usize, Option<Vec<PathElement<'a>>>), ScanError> {
    let rest = b.get(start..).unwrap_or_default();
    if rest.starts_with(NULL_LITERAL) {
        return Ok((NULL_LITERAL.len(), None));
    }
    if rest.first() != Some(&b'[') {
        return Err(malformed(b, format!("expected '[' at offset {start}")));
    }

    let mut pos = start + 1;
    let mut elements = Vec::new();
    let mut kind = EntityKind::Vertex;
    loop {
        match b.get(pos) {
            None => return Err(malformed(b, "path ends before ']'".to_string())),
            Some(b']') => {
                pos += 1;
                break;
            }
            Some(_) => {}
        }

        if !elements.is_empty() {
            if b[pos] != b',' {
                return Err(malformed(b, format!("expected ',' at offset {pos}")));
            }
            pos += 1;
        }
        if elements.len() >= config.max_path_elements {
            return Err(ScanError::PathLimit {
                limit: config.max_path_elements,
            });
        }

        let (advance, entity) = lex_entity(b, pos, kind, config)?;
        pos += advance;
        elements.push(PathElement::lexed(kind, entity));
        kind = kind.next();
    }

    if elements.len() % 2 == 0 && !elements.is_empty() {
        return Err(malformed(b, "path ends with an edge".to_string()));
    }
    tracing::debug!("[PathLexer] lexed {} path elements", elements.len());

    Ok((pos - start, Some(elements)))
}

/// Detach every element from the source buffer.
pub fn into_owned_elements(elements: Vec<PathElement<'_>>) -> Vec<PathElement<'static>> {
    elements.into_iter().map(PathElement::into_owned).collect()
}

impl<'a> From<DecodedEntity<'a>> for PathElement<'a> {
    fn from(entity: DecodedEntity<'a>) -> Self {
        PathElement::lexed(entity.kind(), Some(entity))
    }
}
