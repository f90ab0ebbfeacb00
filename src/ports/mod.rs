/// Ports module defining interfaces for hexagonal architecture
///
/// The pipeline only has driven ports: the application core reaches out to
/// the build tools, the tracker, the console and the report destination
/// through the traits in `outbound`.
pub mod outbound;
