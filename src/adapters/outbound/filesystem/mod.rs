/// Filesystem and stdout adapters for presenting the rendered feed
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
