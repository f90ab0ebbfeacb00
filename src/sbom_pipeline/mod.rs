//! Domain layer for the SBOM publishing pipeline
//!
//! Pure types and rules: build-system classification, project identity,
//! tracker records, the API key handle and the UUID resolution policy.
//! Nothing in here performs network or subprocess I/O.
pub mod domain;
pub mod policies;
pub mod services;
