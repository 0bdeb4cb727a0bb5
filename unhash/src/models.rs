// src/models.rs
pub mod policy;
pub mod rename;
pub mod report;

pub use policy::Policy;
pub use rename::Rename;
pub use report::Report;
