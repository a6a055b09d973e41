//! Query grammar parser for minisql
//!
//! Turns query text into an immutable `Query`. The supported language is flat:
//!
//! ```text
//! query      := "SELECT" selectPart "FROM" identifier ["WHERE" wherePart] [";"]
//! selectPart := "*" | "COUNT(" ("*" | identifier) ")" ... | identifier ("," identifier)*
//! wherePart  := identifier operator literal
//! operator   := "=" | "!=" | ">=" | "<=" | ">" | "<"
//! literal    := "'" text "'" | integer | float
//! identifier := [A-Za-z0-9_]+
//! ```
//!
//! Keywords are case-insensitive; identifiers and literals are kept exactly
//! as written. Anything after the table name when there is no WHERE, and
//! anything after a leading `COUNT(...)`, is ignored.
//!
//! # Design
//!
//! Each clause has its own matcher (top level, select part, where part,
//! literal) so failures report which clause was wrong. There is no
//! expression tree: at most one predicate, no nesting. Extending the
//! language past that means replacing the matchers with a real tokenizer.

mod ast;
mod errors;
mod grammar;

pub use ast::{AggregateFunction, AggregateSpec, AggregateTarget, Predicate, Query, SelectList};
pub use errors::{ParseError, ParseErrorCode, ParseResult};
pub use grammar::{parse_literal, QueryParser};
