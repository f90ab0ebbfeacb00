/// Policies governing ambiguous tracker data
mod resolution_policy;

pub use resolution_policy::{Resolution, ResolutionPolicy};
