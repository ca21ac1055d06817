//! Tokenizer for `--name=value` command lines.
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod lexer;
pub mod parser;
pub mod utils;

pub use lexer::Pairs;
pub use parser::{Error, ParsedArgs};
