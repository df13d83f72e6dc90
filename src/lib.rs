//! # SNIPMAP
//!
//! Extracts named snippets embedded in source files and assembles them into a
//! name-keyed table for documentation builds.
//!
//! Snippets are delimited by an inline tag, usually placed in a comment:
//!
//! ```text
//! # <snippet name="connect">
//! client = connect(url)
//! # </snippet>
//! ```
//!
//! ## Pipeline
//!
//! - **Scanner**: lists source files under a directory
//! - **Tokenizer**: splits a file into open / text / close events
//! - **Stack machine**: matches tags, nested regions included
//! - **Sanitizer**: dedents and strips tag lines and comment remnants
//! - **Builder**: merges every file into one map, rejecting duplicate names

pub mod core;
pub mod formatters;
pub mod parsers;
