//! Integration tests for plural-expression parsing and evaluation.

use mocat::parser::{BinaryOp, Expr};
use mocat::{ExpressionError, PluralRule, parse_expression};

fn eval_all(source: &str, inputs: &[u64]) -> Vec<u64> {
    let rule = PluralRule::compile(source).unwrap();
    inputs.iter().map(|&n| rule.select(n).unwrap()).collect()
}

// =========================================================================
// Literal Vectors
// =========================================================================

#[test]
fn constant_with_trailing_space() {
    let rule = PluralRule::compile("0 ").unwrap();
    for n in [0, 1, 2, 100, u64::MAX] {
        assert_eq!(rule.select(n).unwrap(), 0);
    }
}

#[test]
fn modulo_of_count() {
    assert_eq!(eval_all("n % 10", &[2, 11, 32]), vec![2, 1, 2]);
}

#[test]
fn nested_parentheses() {
    assert_eq!(eval_all("(n % ((10 % 4)))", &[2, 11, 32]), vec![0, 1, 0]);
}

#[test]
fn simple_conditional() {
    assert_eq!(eval_all("n ? 1 : 2", &[1, 0]), vec![1, 2]);
}

#[test]
fn conditional_nested_in_then_branch() {
    assert_eq!(eval_all("n ? 0 ? 1 : 3 : 2", &[1, 0]), vec![3, 2]);
}

#[test]
fn conditional_nested_in_else_branch() {
    assert_eq!(eval_all("n == 0 ? 10 : n == 1 ? 11 : 12", &[0, 1, 2]), vec![10, 11, 12]);
}

// =========================================================================
// Operators
// =========================================================================

#[test]
fn relational_operators_yield_zero_or_one() {
    assert_eq!(eval_all("n < 2", &[1, 2, 3]), vec![1, 0, 0]);
    assert_eq!(eval_all("n > 2", &[1, 2, 3]), vec![0, 0, 1]);
    assert_eq!(eval_all("n <= 2", &[1, 2, 3]), vec![1, 1, 0]);
    assert_eq!(eval_all("n >= 2", &[1, 2, 3]), vec![0, 1, 1]);
}

#[test]
fn equality_operators_yield_zero_or_one() {
    assert_eq!(eval_all("n == 2", &[1, 2]), vec![0, 1]);
    assert_eq!(eval_all("n != 2", &[1, 2]), vec![1, 0]);
}

#[test]
fn logical_operators_use_c_truthiness() {
    assert_eq!(eval_all("n && 7", &[0, 5]), vec![0, 1]);
    assert_eq!(eval_all("n || 0", &[0, 5]), vec![0, 1]);
}

#[test]
fn logical_operators_chain() {
    assert_eq!(eval_all("n && n && 0", &[3]), vec![0]);
    assert_eq!(eval_all("0 || 0 || n", &[0, 3]), vec![0, 1]);
}

#[test]
fn modulo_chains_left_to_right() {
    assert_eq!(eval_all("n % 10 % 3", &[17]), vec![1]);
}

#[test]
fn operators_without_spaces() {
    assert_eq!(eval_all("n%10==1&&n%100!=11?0:1", &[1, 11, 21]), vec![0, 1, 0]);
}

#[test]
fn leading_zeros_are_decimal() {
    assert_eq!(eval_all("007", &[0]), vec![7]);
}

#[test]
fn precedence_of_or_below_equality() {
    let expr = parse_expression("n == 1 || n == 2").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Or,
            Expr::binary(BinaryOp::Equal, Expr::Count, Expr::Literal(1)),
            Expr::binary(BinaryOp::Equal, Expr::Count, Expr::Literal(2)),
        )
    );
}

#[test]
fn precedence_of_modulo_above_relational() {
    let expr = parse_expression("n % 10 < 5").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Less,
            Expr::binary(BinaryOp::Modulo, Expr::Count, Expr::Literal(10)),
            Expr::Literal(5),
        )
    );
}

// =========================================================================
// Reference Rules
// =========================================================================

fn check_against(source: &str, reference: impl Fn(u64) -> u64) {
    let rule = PluralRule::compile(source).unwrap();
    for n in 0..300 {
        assert_eq!(rule.select(n).unwrap(), reference(n), "{source} for n = {n}");
    }
}

#[test]
fn polish_rule_matches_reference() {
    check_against(
        "n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
        |n| {
            if n == 1 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
    );
}

#[test]
fn russian_rule_matches_reference() {
    check_against(
        "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
        |n| {
            if n % 10 == 1 && n % 100 != 11 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
    );
}

#[test]
fn arabic_rule_matches_reference() {
    check_against(
        "n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 ? 4 : 5",
        |n| match (n, n % 100) {
            (0, _) => 0,
            (1, _) => 1,
            (2, _) => 2,
            (_, 3..=10) => 3,
            (_, 11..) => 4,
            _ => 5,
        },
    );
}

#[test]
fn irish_rule_matches_reference() {
    check_against(
        "n==1 ? 0 : n==2 ? 1 : (n>2 && n<7) ? 2 :(n>6 && n<11) ? 3 : 4",
        |n| match n {
            1 => 0,
            2 => 1,
            3..=6 => 2,
            7..=10 => 3,
            _ => 4,
        },
    );
}

#[test]
fn french_rule_matches_reference() {
    check_against("(n > 1)", |n| u64::from(n > 1));
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn trailing_input_is_rejected() {
    let err = parse_expression("n == 1 == 2").unwrap_err();
    assert_eq!(
        err,
        ExpressionError::TrailingInput {
            column: 8,
            remaining: "== 2".to_string(),
        }
    );
    insta::assert_snapshot!(err.to_string(), @r#"unexpected trailing input at column 8: "== 2""#);
}

#[test]
fn arithmetic_outside_grammar_is_rejected() {
    let err = parse_expression("n + 1").unwrap_err();
    assert_eq!(err.remaining(), Some("+ 1"));
}

#[test]
fn tab_is_not_whitespace() {
    let err = parse_expression("n\t% 2").unwrap_err();
    assert!(matches!(err, ExpressionError::TrailingInput { column: 2, .. }));
}

#[test]
fn unrecognized_leading_token_is_rejected() {
    let err = parse_expression("x").unwrap_err();
    assert!(matches!(err, ExpressionError::Syntax { .. }));
    assert!(err.remaining().is_some());
}

#[test]
fn empty_expression_is_rejected() {
    assert!(matches!(
        parse_expression(""),
        Err(ExpressionError::Syntax { .. })
    ));
}

#[test]
fn missing_closing_parenthesis_is_rejected() {
    assert!(matches!(
        parse_expression("(n % 2"),
        Err(ExpressionError::Syntax { .. })
    ));
}

#[test]
fn missing_colon_is_rejected() {
    assert!(matches!(
        parse_expression("n ? 1"),
        Err(ExpressionError::Syntax { .. })
    ));
    assert!(matches!(
        parse_expression("n ? 1 2"),
        Err(ExpressionError::Syntax { .. })
    ));
}

#[test]
fn missing_operand_is_rejected() {
    assert!(parse_expression("n ||").is_err());
    assert!(parse_expression("n ? 1 :").is_err());
    assert!(parse_expression("n %").is_err());
}

#[test]
fn overflowing_literal_is_rejected() {
    assert!(matches!(
        parse_expression("99999999999999999999999"),
        Err(ExpressionError::Syntax { .. })
    ));
}

#[test]
fn invalid_utf8_is_rejected() {
    assert_eq!(
        PluralRule::compile_bytes(b"n \xff 1"),
        Err(ExpressionError::InvalidUtf8)
    );
}
