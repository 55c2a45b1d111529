//! Literal decoding and delivery into caller-owned records.
//!
//! This module turns the textual vertex, edge and path literals emitted by the graph database
//! into calls on record types the caller owns.
//!
//! ## Key Components
//!
//! - [`extent::value_extent`] - Locates the end of an embedded JSON value without parsing it
//! - [`entity::lex_entity`] - Recognizes one vertex or edge literal
//! - [`path::lex_path`] - Recognizes a bracketed, alternating sequence of entity literals
//! - [`EntityConsumer`] / [`PathConsumer`] - Capability traits implemented by record types
//! - [`Decoder`] - Validates a [`Source`], runs the lexers and delivers results
//!
//! ## Property Delivery
//!
//! After [`EntityConsumer::save_entity`] the property JSON is routed through the consumer's
//! [`PropertySink`]:
//!
//! - [`PropertySink::Structural`] decodes it with serde into a field of the consumer. Any
//!   `DeserializeOwned` type is a [`StructuralTarget`].
//! - [`PropertySink::Raw`] hands the raw bytes to a [`PropertyConsumer`], for records that need
//!   to interpret the payload themselves.
//!
//! ```rust
//! use agscan::{
//!     codec::{scan_entity, EntityConsumer, PropertySink},
//!     properties::{EntityCore, EntityKind, VertexCore},
//!     ScanError,
//! };
//! use serde::Deserialize;
//!
//! #[derive(Default, Deserialize)]
//! struct PersonProps {
//!     name: String,
//! }
//!
//! #[derive(Default)]
//! struct Person {
//!     core: Option<VertexCore>,
//!     props: PersonProps,
//! }
//!
//! impl EntityConsumer for Person {
//!     const KIND: EntityKind = EntityKind::Vertex;
//!
//!     fn save_entity(&mut self, core: Option<EntityCore>) -> Result<(), ScanError> {
//!         self.core = core.map(VertexCore::try_from).transpose()?;
//!         Ok(())
//!     }
//!
//!     fn property_sink(&mut self) -> PropertySink<'_> {
//!         PropertySink::Structural(&mut self.props)
//!     }
//! }
//!
//! let mut person = Person::default();
//! scan_entity(r#"person[3.1]{"name": "ann"}"#, &mut person)?;
//! assert_eq!(person.core.unwrap().id.to_string(), "3.1");
//! assert_eq!(person.props.name, "ann");
//! # Ok::<(), ScanError>(())
//! ```

use serde::de::DeserializeOwned;

use crate::{
    config::ScanConfig,
    error::ScanError,
    properties::{EntityCore, EntityKind},
};

pub mod entity;
pub mod extent;
pub mod path;

pub use entity::{DecodedEntity, NULL_LITERAL};
pub use path::PathElement;

/// A record that can receive a decoded vertex or edge.
pub trait EntityConsumer {
    /// The literal grammar applied when this record is scanned from raw bytes.
    const KIND: EntityKind;

    /// Store the entity metadata. `None` means the source was NULL.
    ///
    /// An error should be returned if the metadata cannot be stored without loss of information,
    /// e.g. edge metadata offered to a vertex record.
    fn save_entity(&mut self, core: Option<EntityCore>) -> Result<(), ScanError>;

    /// Where the property JSON of a non-null entity goes.
    fn property_sink(&mut self) -> PropertySink<'_>;
}

/// Custom property handling for records that interpret the raw JSON themselves.
pub trait PropertyConsumer {
    /// `raw` may borrow from the scanned source buffer; copy it to keep it.
    ///
    /// Return an error, rather than panic, on an unrecognized payload shape.
    fn save_properties(&mut self, raw: &[u8]) -> Result<(), ScanError>;
}

/// Default structural decode target.
pub trait StructuralTarget {
    fn decode_json(&mut self, raw: &[u8]) -> Result<(), ScanError>;
}

impl<T: DeserializeOwned> StructuralTarget for T {
    fn decode_json(&mut self, raw: &[u8]) -> Result<(), ScanError> {
        *self = serde_json::from_slice(raw)?;
        Ok(())
    }
}

pub enum PropertySink<'c> {
    Structural(&'c mut dyn StructuralTarget),
    Raw(&'c mut dyn PropertyConsumer),
}

/// A record that can receive a decoded path.
pub trait PathConsumer {
    /// Store the path. `None` means the source was NULL. Each element can be materialized by
    /// passing it back to [scan_entity] as [Source::Element].
    fn save_path(&mut self, elements: Option<Vec<PathElement<'_>>>) -> Result<(), ScanError>;
}

/// A column value as handed over by a database driver, or a path element being re-submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Source<'a> {
    Null,
    Bytes(&'a [u8]),
    Text(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Element(PathElement<'a>),
}

impl Source<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Source::Null => "null",
            Source::Bytes(_) => "bytes",
            Source::Text(_) => "text",
            Source::Int(_) => "int",
            Source::Float(_) => "float",
            Source::Bool(_) => "bool",
            Source::Element(_) => "path element",
        }
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(b: &'a [u8]) -> Self {
        Source::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Source::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Source::Bytes(b)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(s: &'a str) -> Self {
        Source::Text(s)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(s: &'a String) -> Self {
        Source::Text(s)
    }
}

impl From<i64> for Source<'_> {
    fn from(v: i64) -> Self {
        Source::Int(v)
    }
}

impl From<f64> for Source<'_> {
    fn from(v: f64) -> Self {
        Source::Float(v)
    }
}

impl From<bool> for Source<'_> {
    fn from(v: bool) -> Self {
        Source::Bool(v)
    }
}

impl<'a> From<PathElement<'a>> for Source<'a> {
    fn from(element: PathElement<'a>) -> Self {
        Source::Element(element)
    }
}

impl<'a, T: Into<Source<'a>>> From<Option<T>> for Source<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Source::Null)
    }
}

fn unsupported(target: &str, source: &Source<'_>) -> ScanError {
    ScanError::UnsupportedSource {
        target: target.to_string(),
        found: source.type_name().to_string(),
    }
}

fn deliver<C: EntityConsumer>(
    entity: DecodedEntity<'_>,
    consumer: &mut C,
) -> Result<(), ScanError> {
    consumer.save_entity(Some(entity.core))?;
    match consumer.property_sink() {
        PropertySink::Structural(target) => target.decode_json(&entity.properties),
        PropertySink::Raw(saver) => saver.save_properties(&entity.properties),
    }
}

/// Runs the lexers under a [ScanConfig] and delivers results to consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    config: ScanConfig,
}

impl Decoder {
    pub fn new(config: ScanConfig) -> Self {
        Decoder { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Read a vertex or edge (per `C::KIND`) from `source` and store it in `consumer`.
    ///
    /// Raw sources must hold exactly one literal; anything after it fails with
    /// [ScanError::TrailingBytes].
    pub fn scan_entity<'a, C: EntityConsumer>(
        &self,
        source: impl Into<Source<'a>>,
        consumer: &mut C,
    ) -> Result<(), ScanError> {
        let b = match source.into() {
            Source::Null | Source::Element(PathElement::Null) => {
                return consumer.save_entity(None)
            }
            Source::Element(PathElement::Vertex(entity) | PathElement::Edge(entity)) => {
                return deliver(entity, consumer)
            }
            Source::Bytes(b) => b,
            Source::Text(s) => s.as_bytes(),
            other => return Err(unsupported("entity", &other)),
        };

        if b.is_empty() {
            return Err(ScanError::MalformedEntity(
                "empty source for entity".to_string(),
            ));
        }
        let (consumed, entity) = entity::lex_entity(b, 0, C::KIND, &self.config)?;
        if consumed != b.len() {
            return Err(ScanError::TrailingBytes {
                consumed,
                len: b.len(),
            });
        }

        match entity {
            Some(entity) => deliver(entity, consumer),
            None => consumer.save_entity(None),
        }
    }

    /// Read a path from `source` and store it by calling [PathConsumer::save_path].
    pub fn scan_path<'a, P: PathConsumer>(
        &self,
        source: impl Into<Source<'a>>,
        consumer: &mut P,
    ) -> Result<(), ScanError> {
        let b = match source.into() {
            Source::Null => return consumer.save_path(None),
            Source::Bytes(b) => b,
            Source::Text(s) => s.as_bytes(),
            other => return Err(unsupported("path", &other)),
        };

        if b.is_empty() {
            return Err(ScanError::MalformedPath("empty source for path".to_string()));
        }
        let (consumed, elements) = path::lex_path(b, 0, &self.config)?;
        if consumed != b.len() {
            return Err(ScanError::TrailingBytes {
                consumed,
                len: b.len(),
            });
        }

        consumer.save_path(elements)
    }
}

/// [Decoder::scan_entity] with the default [ScanConfig].
pub fn scan_entity<'a, C: EntityConsumer>(
    source: impl Into<Source<'a>>,
    consumer: &mut C,
) -> Result<(), ScanError> {
    Decoder::default().scan_entity(source, consumer)
}

/// [Decoder::scan_path] with the default [ScanConfig].
pub fn scan_path<'a, P: PathConsumer>(
    source: impl Into<Source<'a>>,
    consumer: &mut P,
) -> Result<(), ScanError> {
    Decoder::default().scan_path(source, consumer)
}
