//! # agscan
//!
//! A Rust library for decoding the textual vertex, edge and path literals produced by a
//! graph-oriented database extension into caller-owned records.
//!
//! ## Overview
//!
//! Query results carrying graph values arrive as text:
//!
//! ```text
//! person[3.1]{"name": "ann"}                                  vertex
//! knows[4.1][3.1,3.2]{"since": 1970}                          edge
//! [person[3.1]{},knows[4.1][3.1,3.2]{},person[3.2]{}]         path
//! NULL                                                        null sentinel
//! ```
//!
//! agscan supplies the grammar and the boundary detection; callers supply the record types. Any
//! type implementing [`codec::EntityConsumer`] or [`codec::PathConsumer`] can be populated without
//! changes to the decoder.
//!
//! ### Key Features
//!
//! - **Zero-copy lexing**: property JSON is delivered as a view into the source buffer
//! - **Exact byte accounting**: embedded JSON is bounded by bracket balancing with string-escape
//!   awareness, so sibling path elements are located without parsing JSON twice
//! - **Capability dispatch**: properties are decoded structurally by default, or handed raw to a
//!   [`codec::PropertyConsumer`]
//! - **Two-level path decoding**: path elements are re-submitted to [`codec::scan_entity`] to
//!   materialize them into distinct concrete record types
//!
//! ## Architecture
//!
//! - **[`properties`]**: Graph ids and entity metadata (`GraphId`, `VertexCore`, `EdgeCore`)
//! - **[`codec`]**: Lexers, consumer traits and the `Decoder` entry points
//! - **[`config`]**: Resource limits applied while lexing
//! - **[`basic`]**: Reference record types (`BasicVertex`, `BasicEdge`, `BasicPath`)
//!
//! ## Quick Start
//!
//! ```rust
//! use agscan::basic::BasicPath;
//!
//! let mut path = BasicPath::default();
//! path.scan("[A[1.1]{},B[1.2][1.1,1.3]{},C[1.3]{}]")?;
//!
//! assert!(path.valid);
//! assert_eq!(path.vertices.len(), 2);
//! assert_eq!(path.edges[0].label, "B");
//! assert_eq!(path.to_string(), "[A[1.1]{},B[1.2][1.1,1.3]{},C[1.3]{}]");
//! # Ok::<(), agscan::ScanError>(())
//! ```

pub mod basic;
pub mod codec;
pub mod config;
pub mod error;
pub mod properties;
#[cfg(test)]
mod tests;

pub use error::*;
