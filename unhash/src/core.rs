// src/core.rs
pub mod fixer;
pub mod hash;
pub mod ignore;
pub mod scanner;
