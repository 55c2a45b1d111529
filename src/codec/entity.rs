//! Lexer for single vertex and edge literals.
//!
//! ```text
//! vertex_lit := label "[" id "]" json_value
//! edge_lit   := label "[" id "]" "[" id "," id "]" json_value
//! ```

use std::borrow::Cow;

use crate::{
    codec::extent::value_extent,
    config::ScanConfig,
    error::ScanError,
    properties::{EdgeCore, EntityCore, EntityKind, GraphId, VertexCore},
};

pub const NULL_LITERAL: &[u8] = b"NULL";

/// One lexed vertex or edge.
///
/// `properties` borrows the JSON text straight out of the source buffer. Use
/// [DecodedEntity::into_owned] to keep it past the buffer's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEntity<'a> {
    pub core: EntityCore,
    pub properties: Cow<'a, [u8]>,
}

impl DecodedEntity<'_> {
    pub fn kind(&self) -> EntityKind {
        self.core.kind()
    }

    pub fn into_owned(self) -> DecodedEntity<'static> {
        DecodedEntity {
            core: self.core,
            properties: Cow::Owned(self.properties.into_owned()),
        }
    }
}

fn lossy(b: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(b)
}

fn label_len(b: &[u8]) -> usize {
    b.iter()
        .position(|c| *c == b'[' || c.is_ascii_whitespace())
        .unwrap_or(b.len())
}

/// Whether the bytes at the start of `b` are the null sentinel rather than a label that happens
/// to begin with `NULL`. A label is only a label if its run reaches the opening `[`; callers still
/// fall back to the sentinel when such a label fails to lex.
pub(crate) fn is_null_entity(b: &[u8]) -> bool {
    if !b.starts_with(NULL_LITERAL) {
        return false;
    }
    let run = b
        .iter()
        .position(|c| matches!(c, b'[' | b',' | b']') || c.is_ascii_whitespace());
    run.and_then(|idx| b.get(idx)) != Some(&b'[')
}

fn expect_byte(b: &[u8], pos: usize, want: u8, kind: EntityKind) -> Result<(), ScanError> {
    match b.get(pos) {
        Some(found) if *found == want => Ok(()),
        Some(found) => Err(ScanError::MalformedEntity(format!(
            "{kind} literal expects '{}' at offset {pos}, found '{}' in '{}'",
            want as char,
            *found as char,
            lossy(b)
        ))),
        None => Err(ScanError::MalformedEntity(format!(
            "{kind} literal ends before '{}' at offset {pos}: '{}'",
            want as char,
            lossy(b)
        ))),
    }
}

/// Read bytes from `pos` up to (not including) `stop`, as a graph id. Returns the id and the
/// offset of `stop`.
fn read_id(
    b: &[u8],
    pos: usize,
    stop: u8,
    kind: EntityKind,
) -> Result<(GraphId, usize), ScanError> {
    let len = b[pos..]
        .iter()
        .position(|c| *c == stop || *c == b']')
        .ok_or_else(|| {
            ScanError::MalformedEntity(format!(
                "{kind} literal has an unterminated id at offset {pos}: '{}'",
                lossy(b)
            ))
        })?;
    let end = pos + len;
    expect_byte(b, end, stop, kind)?;
    Ok((GraphId::try_from(&b[pos..end])?, end))
}

/// Lex one entity of the given `kind` starting at `start`.
///
/// Returns the number of bytes consumed and the decoded entity, or `None` when the literal is the
/// null sentinel. Input starting with `NULL` that does not lex as a full literal is the sentinel,
/// leaving the remaining bytes to the caller.
pub fn lex_entity<'a>(
    b: &'a [u8],
    start: usize,
    kind: EntityKind,
    config: &ScanConfig,
) -> Result<(usize, Option<DecodedEntity<'a>>), ScanError> {
    let rest = b.get(start..).unwrap_or_default();
    if rest.starts_with(NULL_LITERAL) {
        if !is_null_entity(rest) {
            match lex_literal(b, start, kind, config) {
                Err(e) if e.is_grammar() => {
                    tracing::trace!("[EntityLexer] NULL at offset {start} is not a label: {e}");
                }
                lexed => return lexed,
            }
        }
        return Ok((NULL_LITERAL.len(), None));
    }
    lex_literal(b, start, kind, config)
}

fn lex_literal<'a>(
    b: &'a [u8],
    start: usize,
    kind: EntityKind,
    config: &ScanConfig,
) -> Result<(usize, Option<DecodedEntity<'a>>), ScanError> {
    let rest = b.get(start..).unwrap_or_default();
    let label_end = start + label_len(rest);
    if label_end == start {
        return Err(ScanError::MalformedEntity(format!(
            "{kind} literal has an empty label at offset {start}: '{}'",
            lossy(b)
        )));
    }
    let label = lossy(&b[start..label_end]).into_owned();

    expect_byte(b, label_end, b'[', kind)?;
    let (id, id_end) = read_id(b, label_end + 1, b']', kind)?;
    let mut pos = id_end + 1;

    let core = match kind {
        EntityKind::Vertex => EntityCore::Vertex(VertexCore { id, label }),
        EntityKind::Edge => {
            expect_byte(b, pos, b'[', kind)?;
            let (start_id, comma) = read_id(b, pos + 1, b',', kind)?;
            let (end_id, close) = read_id(b, comma + 1, b']', kind)?;
            pos = close + 1;
            EntityCore::Edge(EdgeCore {
                id,
                label,
                start: start_id,
                end: end_id,
            })
        }
    };

    let props_end = value_extent(b, pos, config.max_depth)?;
    tracing::trace!(
        "[EntityLexer] {} {}[{}] with {} property bytes",
        kind,
        core.label(),
        core.id(),
        props_end - pos
    );

    Ok((
        props_end - start,
        Some(DecodedEntity {
            core,
            properties: Cow::Borrowed(&b[pos..props_end]),
        }),
    ))
}
