//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times, subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Build a path literal with `edges` edges: `[v0[1.0]{..},e0[2.0][1.0,1.1]{..},v1[1.1]{..},...]`.
#[allow(dead_code)]
pub fn chain_literal(edges: usize) -> String {
    let mut parts = Vec::with_capacity(2 * edges + 1);
    for i in 0..=edges {
        parts.push(format!("v{i}[1.{i}]{{\"i\":{i}}}"));
        if i < edges {
            parts.push(format!(
                "e{i}[2.{i}][1.{i},1.{}]{{\"note\":\"hop, [{i}]\"}}",
                i + 1
            ));
        }
    }
    format!("[{}]", parts.join(","))
}
