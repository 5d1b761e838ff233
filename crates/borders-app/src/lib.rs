//! borders-app library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the `borders` binary share the same module tree.

pub mod application;
pub mod infrastructure;
