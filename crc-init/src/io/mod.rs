//! Filesystem steps of the initializer.

pub mod claude_md;
pub mod components;
pub mod dirs;
