//! Property-based tests for the evaluator and the front end.
//!
//! Arithmetic results are compared against Rust's own wrapping and IEEE
//! operations; the lexer is fed arbitrary text.

use codelang::{
    ast::{BinaryOperator, Expr, LiteralValue, Position, RelationalOperator},
    interpreter::{evaluator::core::Context, lexer::tokenize, value::core::Value},
};
use proptest::prelude::*;

const POS: Position = Position { line: 1, column: 0 };

fn literal(value: impl Into<LiteralValue>) -> Box<Expr> {
    Box::new(Expr::Literal { value: value.into(),
                             pos:   POS, })
}

fn eval(expr: &Expr) -> Value {
    let mut input = std::io::empty();
    let mut output = Vec::new();
    let context = Context::new(&mut input, &mut output);
    context.eval(expr).expect("expression evaluates")
}

fn binary(left: Box<Expr>, op: BinaryOperator, right: Box<Expr>) -> Expr {
    Expr::Binary { left,
                   op,
                   right,
                   pos: POS }
}

fn arb_arithmetic() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::Div),
                Just(BinaryOperator::Mod)]
}

fn arb_ordering() -> impl Strategy<Value = RelationalOperator> {
    prop_oneof![Just(RelationalOperator::Greater),
                Just(RelationalOperator::Less),
                Just(RelationalOperator::GreaterEqual),
                Just(RelationalOperator::LessEqual)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integer_arithmetic_wraps(a in any::<i32>(), b in any::<i32>(), op in arb_arithmetic()) {
        prop_assume!(b != 0 || matches!(op, BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul));

        let expected = match op {
            BinaryOperator::Add => a.wrapping_add(b),
            BinaryOperator::Sub => a.wrapping_sub(b),
            BinaryOperator::Mul => a.wrapping_mul(b),
            BinaryOperator::Div => a.wrapping_div(b),
            BinaryOperator::Mod => a.wrapping_rem(b),
        };

        prop_assert_eq!(eval(&binary(literal(a), op, literal(b))), Value::Integer(expected));
    }

    #[test]
    fn mixed_operands_promote_to_real(a in -10_000i32..10_000, b in -100.0f32..100.0) {
        let sum = eval(&binary(literal(a), BinaryOperator::Add, literal(b)));
        #[allow(clippy::cast_precision_loss)]
        let expected = a as f32 + b;
        prop_assert_eq!(sum, Value::Real(expected));

        let product = eval(&binary(literal(b), BinaryOperator::Mul, literal(a)));
        #[allow(clippy::cast_precision_loss)]
        let expected = b * a as f32;
        prop_assert_eq!(product, Value::Real(expected));
    }

    #[test]
    fn integer_ordering_matches_rust(a in any::<i32>(), b in any::<i32>(), op in arb_ordering()) {
        let expected = match op {
            RelationalOperator::Greater => a > b,
            RelationalOperator::Less => a < b,
            RelationalOperator::GreaterEqual => a >= b,
            RelationalOperator::LessEqual => a <= b,
            RelationalOperator::Equal | RelationalOperator::NotEqual => unreachable!(),
        };
        let expr = Expr::Relational { left: literal(a),
                                      op,
                                      right: literal(b),
                                      pos: POS };

        prop_assert_eq!(eval(&expr), Value::Bool(expected));
    }

    #[test]
    fn concatenation_is_rendered_text(a in any::<i32>(), s in "[a-z ]{0,12}") {
        let expr = Expr::Concat { left:  literal(a),
                                  right: literal(s.as_str()),
                                  pos:   POS, };
        prop_assert_eq!(eval(&expr), Value::Text(format!("{a}{s}")));
    }

    #[test]
    fn lexer_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(&source);
    }
}
