//! Shared test utilities for lexer and dispatch testing

use crate::{
    codec::{EntityConsumer, PropertyConsumer, PropertySink},
    error::ScanError,
    properties::{EntityCore, EntityKind},
};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Consumer that records every call it receives, keeping the raw property bytes and where they
/// lived in memory.
#[derive(Debug, Default)]
pub struct Recorder<const EDGE: bool> {
    pub saved: Vec<Option<EntityCore>>,
    pub properties: Vec<Vec<u8>>,
    pub property_ptrs: Vec<usize>,
}

pub type VertexRecorder = Recorder<false>;
pub type EdgeRecorder = Recorder<true>;

impl<const EDGE: bool> EntityConsumer for Recorder<EDGE> {
    const KIND: EntityKind = if EDGE {
        EntityKind::Edge
    } else {
        EntityKind::Vertex
    };

    fn save_entity(&mut self, core: Option<EntityCore>) -> Result<(), ScanError> {
        self.saved.push(core);
        Ok(())
    }

    fn property_sink(&mut self) -> PropertySink<'_> {
        PropertySink::Raw(self)
    }
}

impl<const EDGE: bool> PropertyConsumer for Recorder<EDGE> {
    fn save_properties(&mut self, raw: &[u8]) -> Result<(), ScanError> {
        self.properties.push(raw.to_vec());
        self.property_ptrs.push(raw.as_ptr() as usize);
        Ok(())
    }
}

/// Byte offset of `needle` inside `haystack`, for checking that lexed views alias the source.
pub fn offset_of(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
        .expect("needle should be present in haystack")
}
