// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::config::{CONFIG_FILE_NAME, Config, default_build_dir};
pub use crate::core::fixer::{FixOptions, fix_build, fix_html_content, rename_hashed, stripped_name};
pub use crate::core::hash::{contains_hash, count_hashes, strip_all_hashes, strip_name_hashes};
pub use crate::core::ignore::{IGNORE_FILE_NAME, Patterns, load_ignore_patterns};
pub use crate::core::scanner::enumerate;
pub use crate::error::{FixError, FixResult};
pub use crate::logging::init_logging;
pub use crate::models::{Policy, Rename, Report};
