// src/core/ignore.rs
mod loader;
mod patterns;

pub use loader::{IGNORE_FILE_NAME, load_ignore_patterns};
pub use patterns::Patterns;
