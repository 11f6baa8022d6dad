//! Generated SQL must be accepted by a PostgreSQL parser

use json2sql::{ConversionOptions, convert_to_schema};
use sqlparser::ast::Statement;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

const DOC: &str = r#"{
    "customer": {
        "fullName": "Ann Lee",
        "balance": 10.5,
        "isActive": true,
        "signupDate": "2024-01-15",
        "externalRef": "550e8400-e29b-41d4-a716-446655440000",
        "notes": null
    },
    "invoice": {
        "customer_id": 1,
        "invoiceLines": [{"amount": 3, "sku": "X-1"}],
        "billingAddress": {"city": "SF"}
    }
}"#;

fn parse(sql: &str) -> Vec<Statement> {
    Parser::parse_sql(&PostgreSqlDialect {}, sql).expect("generated SQL should parse")
}

#[test]
fn test_default_output_parses() {
    let result = convert_to_schema(DOC, &ConversionOptions::default()).unwrap();
    let statements = parse(&result.statements);

    // 4 tables, 2 foreign keys, 4 indexes
    assert_eq!(statements.len(), 10);
    let creates = statements
        .iter()
        .filter(|s| matches!(s, Statement::CreateTable { .. }))
        .count();
    let alters = statements
        .iter()
        .filter(|s| matches!(s, Statement::AlterTable { .. }))
        .count();
    let indexes = statements
        .iter()
        .filter(|s| matches!(s, Statement::CreateIndex { .. }))
        .count();
    assert_eq!((creates, alters, indexes), (4, 2, 4));
}

#[test]
fn test_minimal_output_parses() {
    let options = ConversionOptions::builder()
        .add_primary_key(false)
        .add_timestamps(false)
        .build();
    let result = convert_to_schema(DOC, &options).unwrap();

    assert_eq!(parse(&result.statements).len(), 6);
}
