//! Request-level middleware: per-client rate limiting and trace spans.

pub mod rate_limit;
pub mod tracing;
