pub mod pipeline;
pub mod session;

pub use kwgen_codegen::*;
pub use kwgen_config::*;
pub use kwgen_fs::*;
pub use kwgen_scan::*;
pub use kwgen_shell::*;
pub use pipeline::{GenerateError, Generated, generate, render};
