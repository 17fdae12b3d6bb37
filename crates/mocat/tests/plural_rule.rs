//! Tests for compiled plural rules and evaluation errors.

use mocat::{EvalError, PluralRule, parse_expression};

#[test]
fn default_rule_is_two_form() {
    let rule = PluralRule::default();
    assert_eq!(rule.select(0).unwrap(), 1);
    assert_eq!(rule.select(1).unwrap(), 0);
    assert_eq!(rule.select(2).unwrap(), 1);
    assert_eq!(rule.to_string(), "(n != 1)");
}

#[test]
fn select_index_checks_bounds() {
    let rule = PluralRule::compile("n").unwrap();
    assert_eq!(rule.select_index(1, 2), Ok(1));
    assert_eq!(
        rule.select_index(2, 2),
        Err(EvalError::FormOutOfRange {
            n: 2,
            index: 2,
            available: 2,
        })
    );
}

#[test]
fn modulo_by_zero_is_an_error() {
    let rule = PluralRule::compile("n % 0").unwrap();
    assert_eq!(rule.select(5), Err(EvalError::DivisionByZero { n: 5 }));
}

#[test]
fn modulo_by_computed_zero_is_an_error() {
    let rule = PluralRule::compile("7 % (n % 2)").unwrap();
    assert_eq!(rule.select(3).unwrap(), 0);
    assert_eq!(rule.select(4), Err(EvalError::DivisionByZero { n: 4 }));
}

#[test]
fn untaken_branch_is_not_evaluated() {
    let rule = PluralRule::compile("n == 0 ? 0 : 1 % n").unwrap();
    assert_eq!(rule.select(0).unwrap(), 0);
}

#[test]
fn logical_operators_short_circuit() {
    let and = PluralRule::compile("n && 1 % 0").unwrap();
    assert_eq!(and.select(0).unwrap(), 0);
    let or = PluralRule::compile("n || 1 % 0").unwrap();
    assert_eq!(or.select(1).unwrap(), 1);
}

#[test]
fn display_reparses_to_same_tree() {
    for source in [
        "n != 1",
        "n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
        "n ? 0 ? 1 : 3 : 2",
        "(n % ((10 % 4)))",
    ] {
        let rule = PluralRule::compile(source).unwrap();
        let rendered = rule.to_string();
        assert_eq!(parse_expression(&rendered).unwrap(), *rule.expression(), "{rendered}");
    }
}

#[test]
fn eval_error_messages() {
    insta::assert_snapshot!(
        EvalError::DivisionByZero { n: 4 }.to_string(),
        @"modulo by zero evaluating plural rule for n = 4"
    );
    insta::assert_snapshot!(
        EvalError::FormOutOfRange { n: 2, index: 5, available: 2 }.to_string(),
        @"plural rule selected form 5 for n = 2, but message has 2 form(s)"
    );
}
