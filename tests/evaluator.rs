use codelang::{
    ast::{
        BinaryOperator, ConditionalBranch, Declarator, Expr, Position, Program, Statement,
        UnaryOperator,
    },
    config::Config,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        value::{core::Value, declared_type::DeclaredType},
    },
    parse_source, run_program,
};
use pretty_assertions::assert_eq;

const POS: Position = Position { line: 1, column: 0 };

fn int(n: i32) -> Expr {
    Expr::Literal { value: n.into(),
                    pos:   POS, }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     pos:  POS, }
}

fn declare(ty: DeclaredType, name: &str, initializer: Option<Expr>) -> Statement {
    Statement::Declaration { ty,
                             declarators: vec![Declarator { name: name.to_string(),
                                                            initializer,
                                                            pos: POS }],
                             pos: POS }
}

fn run_statements(statements: Vec<Statement>) -> (Result<(), RuntimeError>, String) {
    let program = Program { statements,
                            pos: POS };
    let mut input = std::io::empty();
    let mut output = Vec::new();
    let result = run_program(&program, Config::default(), &mut input, &mut output);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn hand_built_program_runs() {
    let statements =
        vec![declare(DeclaredType::Integer, "x", Some(int(6))),
             Statement::Assignment { targets: vec!["x".to_string()],
                                     value:   Expr::Binary { left:  Box::new(var("x")),
                                                             op:    BinaryOperator::Mul,
                                                             right: Box::new(int(7)),
                                                             pos:   POS, },
                                     pos:     POS, },
             Statement::Display { expr: var("x"),
                                  pos:  POS, }];

    let (result, output) = run_statements(statements);
    assert!(result.is_ok());
    assert_eq!(output, "42");
}

#[test]
fn if_without_match_and_without_else_does_nothing() {
    let branch = ConditionalBranch { condition: Expr::Literal { value: false.into(),
                                                                pos:   POS, },
                                     body:      vec![Statement::Display { expr: int(1),
                                                                          pos:  POS, }],
                                     pos:       POS, };
    let statements = vec![Statement::If { branch,
                                          else_ifs: Vec::new(),
                                          else_body: None,
                                          pos: POS }];

    let (result, output) = run_statements(statements);
    assert!(result.is_ok());
    assert_eq!(output, "");
}

#[test]
fn integer_overflow_wraps() {
    let mut input = std::io::empty();
    let mut output = Vec::new();
    let context = Context::new(&mut input, &mut output);

    let sum = Expr::Binary { left:  Box::new(int(i32::MAX)),
                             op:    BinaryOperator::Add,
                             right: Box::new(int(1)),
                             pos:   POS, };
    assert_eq!(context.eval(&sum).unwrap(), Value::Integer(i32::MIN));

    let negated = Expr::Unary { op:   UnaryOperator::Minus,
                                expr: Box::new(int(i32::MIN)),
                                pos:  POS, };
    assert_eq!(context.eval(&negated).unwrap(), Value::Integer(i32::MIN));
}

#[test]
fn redeclaration_keeps_the_original_binding() {
    let mut input = std::io::empty();
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    context.execute(&declare(DeclaredType::Integer, "x", Some(int(1)))).unwrap();
    context.execute(&declare(DeclaredType::Text, "x", None)).unwrap();

    let binding = context.environment.get("x").unwrap();
    assert_eq!(binding.ty, DeclaredType::Integer);
    assert_eq!(binding.value, Value::Integer(1));
    assert_eq!(context.warnings.len(), 1);
    assert!(!context.warnings[0].is_fatal());
}

#[test]
fn scan_keeps_values_assigned_before_a_bad_input() {
    let program = parse_source("BEGIN CODE\nINT a, b, c\nSCAN: a, b, c\nEND CODE").unwrap();
    let mut input = "1, oops, 3\n".as_bytes();
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    let result = context.execute_program(&program);
    assert!(matches!(result, Err(RuntimeError::InvalidScanFormat { .. })));

    assert_eq!(context.environment.get("a").unwrap().value, Value::Integer(1));
    assert_eq!(context.environment.get("b").unwrap().value, Value::Empty);
    assert_eq!(context.environment.get("c").unwrap().value, Value::Empty);
}

#[test]
fn scan_count_error_changes_nothing() {
    let program = parse_source("BEGIN CODE\nINT a = 5\nSCAN: a\nEND CODE").unwrap();
    let mut input = "1, 2\n".as_bytes();
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    assert!(context.execute_program(&program).is_err());
    assert_eq!(context.environment.get("a").unwrap().value, Value::Integer(5));
}

#[test]
fn lowered_iteration_cap_applies() {
    let program = parse_source("BEGIN CODE\nINT i = 0\nWHILE (i < 10)\nBEGIN WHILE\ni = i + \
                                1\nEND WHILE\nEND CODE")
        .unwrap();
    let mut input = std::io::empty();

    let mut output = Vec::new();
    let config = Config::default().with_max_loop_iterations(10);
    assert!(run_program(&program, config, &mut input, &mut output).is_ok());

    let mut output = Vec::new();
    let config = Config::default().with_max_loop_iterations(9);
    let result = run_program(&program, config, &mut input, &mut output);
    assert!(matches!(result, Err(RuntimeError::InfiniteLoop { .. })));
}

#[test]
fn do_while_cap_is_checked_before_the_guard() {
    let program = parse_source("BEGIN CODE\nINT i = 0\nDO\nBEGIN DO\ni = i + 1\nEND DO\nWHILE (i \
                                < 5)\nDISPLAY: i\nEND CODE")
        .unwrap();
    let mut input = std::io::empty();

    let mut output = Vec::new();
    let config = Config::default().with_max_loop_iterations(5);
    let result = run_program(&program, config, &mut input, &mut output);
    assert!(matches!(result, Err(RuntimeError::InfiniteLoop { .. })));
    assert_eq!(String::from_utf8(output).unwrap(), "");

    let mut output = Vec::new();
    let config = Config::default().with_max_loop_iterations(6);
    assert!(run_program(&program, config, &mut input, &mut output).is_ok());
    assert_eq!(String::from_utf8(output).unwrap(), "5");
}

#[test]
fn do_while_cap_wins_over_a_non_boolean_guard() {
    let program = parse_source("BEGIN CODE\nDO\nBEGIN DO\nEND DO\nWHILE (1)\nEND CODE").unwrap();
    let mut input = std::io::empty();
    let mut output = Vec::new();

    let config = Config::default().with_max_loop_iterations(1);
    let result = run_program(&program, config, &mut input, &mut output);
    assert!(matches!(result, Err(RuntimeError::InfiniteLoop { .. })));

    let result = run_program(&program, Config::default(), &mut input, &mut output);
    assert!(matches!(result, Err(RuntimeError::LogicError { .. })));
}

#[test]
fn environment_enforces_declared_types() {
    let mut env = Environment::new();
    assert!(env.is_empty());

    env.declare("r", DeclaredType::Real, None, POS).unwrap();
    assert_eq!(env.len(), 1);
    assert!(matches!(env.assign("r", Value::Integer(1), POS),
                     Err(RuntimeError::TypeMismatch { .. })));
    env.assign("r", Value::Real(1.5), POS).unwrap();

    assert_eq!(env.lookup_value("r", POS).unwrap(), &Value::Real(1.5));
    assert!(matches!(env.lookup_value("q", POS), Err(RuntimeError::UndefinedVariable { .. })));
    assert!(matches!(env.lookup_type("q", POS), Err(RuntimeError::UndeclaredVariable { .. })));
    assert!(matches!(env.declare("r", DeclaredType::Real, None, POS),
                     Err(RuntimeError::RedeclaredVariable { .. })));
}

#[test]
fn scanned_text_converts_by_declared_type() {
    assert_eq!(DeclaredType::Integer.parse_input("-12", POS).unwrap(), Value::Integer(-12));
    assert_eq!(DeclaredType::Real.parse_input("0.25", POS).unwrap(), Value::Real(0.25));
    assert_eq!(DeclaredType::Bool.parse_input("FALSE", POS).unwrap(), Value::Bool(false));
    assert_eq!(DeclaredType::Char.parse_input("x", POS).unwrap(), Value::Char('x'));
    assert_eq!(DeclaredType::Text.parse_input("", POS).unwrap(), Value::Text(String::new()));

    assert!(DeclaredType::Char.parse_input("xy", POS).is_err());
    assert!(DeclaredType::Bool.parse_input("yes", POS).is_err());
    assert!(DeclaredType::Integer.parse_input("1.5", POS).is_err());
}
