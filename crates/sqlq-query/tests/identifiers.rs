//! Identifier formatting across dialects

use pretty_assertions::assert_eq;
use rstest::*;
use sqlq_query::prelude::*;

#[rstest]
#[case::bare("users", "`users`", r#""users""#)]
#[case::qualified("u.name", "`u`.`name`", r#""u"."name""#)]
#[case::asterisk("u.*", "`u`.*", r#""u".*"#)]
#[case::alias("name AS n", "`name` AS `n`", r#""name" AS "n""#)]
#[case::alias_lowercase("name as n", "`name` AS `n`", r#""name" AS "n""#)]
#[case::qualified_alias("u.name AS n", "`u`.`name` AS `n`", r#""u"."name" AS "n""#)]
#[case::first_dot_only("db.t.c", "`db`.`t`.`c`", r#""db"."t"."c""#)]
fn test_identifier_shapes(#[case] input: &str, #[case] mysql: &str, #[case] postgres: &str) {
	assert_eq!(Sqlq::new("mysql", true).identifier(input), mysql);
	assert_eq!(Sqlq::new("postgres", true).identifier(input), postgres);
	assert_eq!(Sqlq::new("sqlite3", true).identifier(input), postgres);
}

/// Test: the last ` AS ` is the split point
#[rstest]
fn test_alias_splits_at_last_as() {
	let mut q = Sqlq::new("mysql", true);
	assert_eq!(q.identifier("a AS b AS c"), "`a` AS `b` AS `c`");
	assert_eq!(
		Ident::parse("a AS b AS c"),
		Ident::name("a").alias("b").alias("c")
	);
}

/// Test: embedded quote characters cannot break out of the identifier
#[rstest]
#[case::mysql("mysql", "we`ird", "`we``ird`")]
#[case::postgres("postgres", r#"we"ird"#, r#""we""ird""#)]
#[case::mysql_double_quote_is_plain("mysql", r#"we"ird"#, r#"`we"ird`"#)]
fn test_embedded_quotes_are_doubled(
	#[case] dialect: &str,
	#[case] input: &str,
	#[case] expected: &str,
) {
	let mut q = Sqlq::new(dialect, true);
	assert_eq!(q.identifier(input), expected);
}

#[rstest]
fn test_identifier_lists() {
	let mut q = Sqlq::new("postgres", true);
	assert_eq!(q.identifier(["a", "b.c", "d AS e"]), r#""a", "b"."c", "d" AS "e""#);
	assert_eq!(q.identifier(Vec::<String>::new()), "");

	let owned = vec!["x".to_string(), "y".to_string()];
	assert_eq!(q.identifier(owned.as_slice()), r#""x", "y""#);
}

/// Test: structured identifiers skip text parsing
#[rstest]
fn test_structured_identifiers() {
	let mut q = Sqlq::new("sqlite3", true);
	let ident = Ident::qualified("schema.v1", "col AS x").alias("alias");
	assert_eq!(q.identifier(ident), r#""schema.v1"."col AS x" AS "alias""#);
	assert_eq!(
		q.identifier(Ident::qualified_asterisk("t")),
		r#""t".*"#
	);
}

#[rstest]
fn test_raw_identifiers_keep_source_text() {
	let mut q = Sqlq::new("mysql", true);
	assert_eq!(q.format_identifier("COUNT(*) as n", true, false), "COUNT(*) as n");
	assert_eq!(q.format_identifier(["a.b", "c"], true, false), "a.b, c");
}

#[rstest]
#[case::empty("")]
#[case::leading_dot(".c")]
#[case::trailing_dot("t.")]
#[case::empty_alias("a AS ")]
fn test_parse_strict_rejects(#[case] input: &str) {
	assert!(matches!(
		Ident::parse_strict(input),
		Err(QueryError::InvalidIdentifier(_))
	));
}

#[rstest]
fn test_parse_strict_accepts() {
	assert_eq!(
		Ident::parse_strict("t.c AS x"),
		Ok(Ident::qualified("t", "c").alias("x"))
	);
}
