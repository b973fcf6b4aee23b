//! Ruby parsing for enumlint.
//!
//! - [`treesitter`]: parses Ruby with tree-sitter and lowers the CST
//! - [`ast`]: the closed node-shape tree rules match against
//! - [`walker`]: Ruby file discovery

pub mod ast;
pub mod treesitter;
pub mod walker;
