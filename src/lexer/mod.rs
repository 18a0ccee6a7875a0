//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens on
//! demand for the parser. It handles:
//!
//! - Whitespace skipping
//! - Recognition of keywords, identifiers and integer literals
//! - One and two character operators
//! - Illegal characters, which become `Illegal` tokens rather than failures

pub mod lexer;
pub mod tokens;
