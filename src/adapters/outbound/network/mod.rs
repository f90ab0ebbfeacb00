/// Network adapters for the tracker API
mod dependency_track_client;

pub use dependency_track_client::DependencyTrackClient;
