//! The Assembler module is in charge of taking a
//! Hack assembly file and producing its binary text form.
//!
//! It does this by implementing a lazy tokenizer, a
//! recursive descent parser with one token of lookahead,
//! and a two-pass symbol resolver feeding the encoder.

pub mod ast;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token;

pub use driver::assemble;
