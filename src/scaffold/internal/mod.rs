//! Internal implementation for scaffold module

pub mod fs_ops;
pub mod precondition;
