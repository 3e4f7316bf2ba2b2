//! Integration test support crate.
//!
//! Tests live in `tests/`; this library intentionally exports nothing.
