//! Infrastructure layer: file-system storage, the asynchronous atlas fetch,
//! and telemetry.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `borders_core`, but MUST NOT be imported by the `application` layer.

pub mod atlas_loader;
pub mod storage;
pub mod telemetry;
