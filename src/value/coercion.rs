//! Coercion and comparison of a row cell against a WHERE literal

use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use super::errors::{CoercionError, UnknownOperator};
use super::types::Value;

/// Comparison operators accepted in a WHERE clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl CompareOp {
    /// All operators, two-character symbols first.
    ///
    /// Matching must try `>=` before `>` so the former is never split.
    pub const ALL: [CompareOp; 6] = [
        CompareOp::NotEq,
        CompareOp::Gte,
        CompareOp::Lte,
        CompareOp::Eq,
        CompareOp::Gt,
        CompareOp::Lt,
    ];

    /// Returns the SQL symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }

    /// Returns true if the given ordering satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }
}

impl FromStr for CompareOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareOp::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Coerces a row cell to the kind of the comparison literal.
///
/// See the module docs for the rule order. Only numeric targets can fail.
pub fn coerce(cell: &Value, against: &Value) -> Result<Value, CoercionError> {
    if cell.kind() == against.kind() {
        return Ok(cell.clone());
    }

    match against {
        Value::Text(_) => Ok(Value::Text(cell.to_string())),
        Value::Float(_) => {
            let text = cell.to_string();
            parse_float(&text).ok_or_else(|| CoercionError::new(text, against.kind()))
        }
        Value::Integer(_) => {
            let text = cell.to_string();
            // The decimal point in the cell text, not the literal, picks float
            let parsed = if text.contains('.') {
                parse_float(&text)
            } else {
                parse_whole_number(text.trim())
            };
            parsed.ok_or_else(|| CoercionError::new(text, against.kind()))
        }
    }
}

fn parse_float(text: &str) -> Option<Value> {
    text.trim().parse::<f64>().ok().map(Value::Float)
}

/// Parses digits without a decimal point.
///
/// Values outside the `i64` range become floats, so they still compare
/// numerically (exact only up to 2^53).
pub fn parse_whole_number(text: &str) -> Option<Value> {
    match text.parse::<i64>() {
        Ok(n) => Some(Value::Integer(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            text.parse::<f64>().ok().map(Value::Float)
        }
        Err(_) => None,
    }
}

/// Applies `op` to an already coerced cell and the literal.
///
/// Numbers follow IEEE rules: a NaN side satisfies only `!=`. Returns `None`
/// only for text against a number, which the executor reports as an
/// execution error.
pub fn compare(value: &Value, op: CompareOp, literal: &Value) -> Option<bool> {
    match value.partial_order(literal) {
        Some(ordering) => Some(op.accepts(ordering)),
        None if value.kind().is_numeric() && literal.kind().is_numeric() => {
            Some(op == CompareOp::NotEq)
        }
        None => None,
    }
}
