// ABOUTME: Command implementations for doorlist CLI
// ABOUTME: Submodules for parse, summary, and search commands plus shared input loading

pub mod input;
pub mod parse;
pub mod search;
pub mod summary;
