//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character scanning with line/column tracking
//! - Recognition of keywords, identifiers, literals, and operators
//! - Maximal munch over the operator table
//! - Comments, whitespace and line-break collapsing

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
