//! Clause matchers for the query grammar
//!
//! The statement and COUNT matchers are prefix matches: text after the table
//! name (with no WHERE), or after `COUNT(...)`, is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{AggregateSpec, Predicate, Query, SelectList};
use super::errors::{ParseError, ParseResult};
use crate::value::{parse_whole_number, CompareOp, Value};

static QUERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*SELECT\s+(.*?)\s+FROM\s+([A-Za-z0-9_]+)(?:\s+WHERE\s+(.+))?")
        .expect("query pattern is valid")
});

static COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^COUNT\s*\(\s*(\*|[A-Za-z0-9_]+)\s*\)").expect("count pattern is valid")
});

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern is valid"));

// Two-character operators come first so `>=` never matches as `>` then `=`
static WHERE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([A-Za-z0-9_]+)\s*(!=|>=|<=|=|>|<)\s*(.+)$")
        .expect("where pattern is valid")
});

/// Parses query text into a `Query`
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a full query.
    ///
    /// Clause order is fixed: the top-level shape is matched first, then
    /// the select part, then the optional where part.
    pub fn parse(&self, text: &str) -> ParseResult<Query> {
        let text = text.trim().trim_end_matches(';').trim_end();
        if text.is_empty() {
            return Err(ParseError::empty_query());
        }

        let caps = QUERY_RE
            .captures(text)
            .ok_or_else(ParseError::invalid_syntax)?;

        let select_part = caps.get(1).map_or("", |m| m.as_str());
        let table = caps.get(2).map_or("", |m| m.as_str());
        let where_part = caps.get(3).map(|m| m.as_str());

        let mut query = match Self::parse_select(select_part)? {
            SelectPart::Aggregate(spec) => Query::new(table).with_aggregate(spec),
            SelectPart::Columns(select) => Query {
                select,
                ..Query::new(table)
            },
        };

        if let Some(where_part) = where_part {
            query.predicate = Some(Self::parse_where(where_part)?);
        }

        Ok(query)
    }

    /// Parses the text between SELECT and FROM
    fn parse_select(select_part: &str) -> ParseResult<SelectPart> {
        let select_part = select_part.trim();

        if let Some(caps) = COUNT_RE.captures(select_part) {
            let spec = match caps.get(1).map(|m| m.as_str()) {
                Some("*") | None => AggregateSpec::count_all(),
                Some(column) => AggregateSpec::count_column(column),
            };
            return Ok(SelectPart::Aggregate(spec));
        }

        if select_part == "*" {
            return Ok(SelectPart::Columns(SelectList::All));
        }

        let columns = select_part
            .split(',')
            .map(str::trim)
            .map(|col| {
                if IDENT_RE.is_match(col) {
                    Ok(col.to_string())
                } else {
                    Err(ParseError::invalid_column_name(col))
                }
            })
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(SelectPart::Columns(SelectList::Columns(columns)))
    }

    /// Parses the text after WHERE
    fn parse_where(where_part: &str) -> ParseResult<Predicate> {
        let where_part = where_part.trim();

        let caps = WHERE_RE
            .captures(where_part)
            .ok_or_else(|| ParseError::invalid_where(where_part))?;

        let column = caps.get(1).map_or("", |m| m.as_str());
        let op = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<CompareOp>().ok())
            .ok_or_else(|| ParseError::invalid_where(where_part))?;
        let literal = parse_literal(caps.get(3).map_or("", |m| m.as_str()))?;

        Ok(Predicate::new(column, op, literal))
    }
}

/// Result of matching the select part
enum SelectPart {
    Aggregate(AggregateSpec),
    Columns(SelectList),
}

/// Parses a WHERE literal.
///
/// `'...'` becomes text with the outer quotes stripped. Anything else must be
/// a number: float if it contains a '.', integer otherwise. Integers past
/// the `i64` range are read as floats.
pub fn parse_literal(text: &str) -> ParseResult<Value> {
    let text = text.trim();

    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        return Ok(Value::text(&text[1..text.len() - 1]));
    }

    let parsed = if text.contains('.') {
        text.parse::<f64>().ok().map(Value::Float)
    } else {
        parse_whole_number(text)
    };

    parsed.ok_or_else(|| ParseError::invalid_value(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{AggregateTarget, ParseErrorCode};

    fn parse(text: &str) -> ParseResult<Query> {
        QueryParser::new().parse(text)
    }

    #[test]
    fn test_select_all() {
        let query = parse("SELECT * FROM people").unwrap();
        assert_eq!(query.select, SelectList::All);
        assert_eq!(query.table, "people");
        assert!(query.predicate.is_none());
        assert!(query.aggregate.is_none());
    }

    #[test]
    fn test_column_list_trimmed_in_order() {
        let query = parse("SELECT salary ,name,  age FROM people").unwrap();
        assert_eq!(query.select, SelectList::columns(["salary", "name", "age"]));
    }

    #[test]
    fn test_keywords_case_insensitive_identifiers_kept() {
        let query = parse("select Name from People where Age >= 30").unwrap();
        assert_eq!(query.select, SelectList::columns(["Name"]));
        assert_eq!(query.table, "People");
        let pred = query.predicate.unwrap();
        assert_eq!(pred.column, "Age");
        assert_eq!(pred.op, CompareOp::Gte);
        assert_eq!(pred.literal, Value::Integer(30));
    }

    #[test]
    fn test_count_star() {
        let query = parse("SELECT count( * ) FROM t").unwrap();
        assert_eq!(query.aggregate, Some(AggregateSpec::count_all()));
        assert!(query.select.is_all());
    }

    #[test]
    fn test_count_column() {
        let query = parse("SELECT COUNT(name) FROM t WHERE age > 30").unwrap();
        let spec = query.aggregate.unwrap();
        assert_eq!(spec.target, AggregateTarget::Column("name".into()));
        assert!(query.predicate.is_some());
    }

    #[test]
    fn test_count_ignores_rest_of_select_list() {
        let query = parse("SELECT COUNT(*), name FROM t").unwrap();
        assert_eq!(query.aggregate, Some(AggregateSpec::count_all()));
        assert!(query.select.is_all());

        let query = parse("SELECT COUNT(age) name FROM t").unwrap();
        assert_eq!(query.aggregate, Some(AggregateSpec::count_column("age")));
    }

    #[test]
    fn test_count_must_lead_select_list() {
        let err = parse("SELECT name, COUNT(*) FROM t").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidColumnName);
        assert_eq!(err.token(), Some("COUNT(*)"));
    }

    #[test]
    fn test_invalid_column_name() {
        let err = parse("SELECT na-me FROM t").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidColumnName);
        assert_eq!(err.token(), Some("na-me"));

        let err = parse("SELECT a,,b FROM t").unwrap_err();
        assert_eq!(err.token(), Some(""));
    }

    #[test]
    fn test_misspelled_from() {
        let err = parse("SELECT * FORM t").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidSyntax);
    }

    #[test]
    fn test_missing_from() {
        assert_eq!(
            parse("SELECT name").unwrap_err().code(),
            ParseErrorCode::SqlInvalidSyntax
        );
        assert_eq!(
            parse("INVALID QUERY SYNTAX").unwrap_err().code(),
            ParseErrorCode::SqlInvalidSyntax
        );
    }

    #[test]
    fn test_trailing_semicolon() {
        let query = parse("SELECT name FROM t;").unwrap();
        assert_eq!(query.table, "t");
        assert_eq!(query.select, SelectList::columns(["name"]));

        let query = parse("SELECT name FROM t WHERE age > 30 ;").unwrap();
        assert_eq!(query.predicate.unwrap().literal, Value::Integer(30));

        assert_eq!(parse(";").unwrap_err().code(), ParseErrorCode::SqlEmptyQuery);
    }

    #[test]
    fn test_text_after_table_ignored() {
        let query = parse("SELECT * FROM t LIMIT 5").unwrap();
        assert_eq!(query.table, "t");
        assert!(query.predicate.is_none());

        // A bare WHERE has nothing to match, so only the prefix is used
        let query = parse("SELECT * FROM t WHERE").unwrap();
        assert!(query.predicate.is_none());
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(
            parse("   ").unwrap_err().code(),
            ParseErrorCode::SqlEmptyQuery
        );
    }

    #[test]
    fn test_two_char_operators_not_split() {
        for (text, op) in [
            ("a >= 1", CompareOp::Gte),
            ("a <= 1", CompareOp::Lte),
            ("a != 1", CompareOp::NotEq),
            ("a>1", CompareOp::Gt),
            ("a<1", CompareOp::Lt),
            ("a=1", CompareOp::Eq),
        ] {
            let query = parse(&format!("SELECT * FROM t WHERE {}", text)).unwrap();
            let pred = query.predicate.unwrap();
            assert_eq!(pred.op, op, "{}", text);
            assert_eq!(pred.literal, Value::Integer(1));
        }
    }

    #[test]
    fn test_spaceship_operator_rejected_by_literal() {
        // `<=` matches, leaving `> 'Alice'` as the literal
        let err = parse("SELECT name FROM t WHERE name <=> 'Alice'").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidValue);
    }

    #[test]
    fn test_invalid_where_shape() {
        let err = parse("SELECT * FROM t WHERE age").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidWhere);

        let err = parse("SELECT * FROM t WHERE age LIKE 3").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::SqlInvalidWhere);
    }

    #[test]
    fn test_quoted_literal_keeps_case_and_spaces() {
        let query = parse("SELECT * FROM t WHERE city = 'New York'").unwrap();
        assert_eq!(query.predicate.unwrap().literal, Value::text("New York"));
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_literal("'USA'").unwrap(), Value::text("USA"));
        assert_eq!(parse_literal("''").unwrap(), Value::text(""));
        assert_eq!(parse_literal("'O'Brien'").unwrap(), Value::text("O'Brien"));
        assert_eq!(parse_literal("42").unwrap(), Value::Integer(42));
        assert_eq!(parse_literal("-7").unwrap(), Value::Integer(-7));
        assert_eq!(parse_literal("3.14").unwrap(), Value::Float(3.14));
    }

    #[test]
    fn test_oversized_integer_literal() {
        assert_eq!(
            parse_literal("99999999999999999999").unwrap(),
            Value::Float(1e20)
        );
        let query = parse("SELECT id FROM t WHERE id > 99999999999999999999").unwrap();
        assert_eq!(query.predicate.unwrap().literal, Value::Float(1e20));
    }

    #[test]
    fn test_invalid_literals() {
        for text in ["USA", "'", "'open", "1.2.3", "\"USA\""] {
            let err = parse_literal(text).unwrap_err();
            assert_eq!(err.code(), ParseErrorCode::SqlInvalidValue, "{}", text);
        }
    }
}
