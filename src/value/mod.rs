//! Value model for minisql
//!
//! Every cell and every WHERE literal is a `Value`: a closed variant over
//! text, integer and float. Rows arrive from ingestion as text only; typed
//! comparison happens late, by coercing the cell against the literal.
//!
//! # Coercion Rules (strict order)
//!
//! 1. Same kind on both sides: cell is used unchanged
//! 2. Text literal: cell is rendered to text (never fails)
//! 3. Numeric literal: cell text is parsed as a number
//!    - Float literal: parse as float
//!    - Integer literal: parse as float if the cell text has a '.', else integer
//!      (float again when the integer overflows `i64`)
//!
//! Numeric comparison follows IEEE rules, so a NaN cell satisfies only `!=`.
//!
//! Rule 2 means `country = 'USA'` always compares as text, while
//! `age > 30` compares numerically.

mod coercion;
mod errors;
mod types;

pub use coercion::{coerce, compare, parse_whole_number, CompareOp};
pub use errors::{CoercionError, UnknownOperator};
pub use types::{Value, ValueKind};
