//! Profile source adapters

mod default_source;
mod filesystem;
mod in_memory;

pub use default_source::DefaultProfileSource;
pub use filesystem::FsProfileSource;
pub use in_memory::InMemoryProfileSource;
