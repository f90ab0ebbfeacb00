/// Filesystem adapters for presenting the run result
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
