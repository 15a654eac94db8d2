pub mod loader;
pub mod memory;
pub mod walk_dir;

pub use loader::{DiskFiles, FileEmitter, FileLoader};
pub use memory::MemoryFiles;
