//! Utility modules: build info, persistence, terminal restore.

pub mod build_info;
pub mod persistence;
pub mod terminal;

pub use build_info::*;
