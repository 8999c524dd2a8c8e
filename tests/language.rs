use std::{collections::HashMap, fs, time::Duration};

use expreval::{
    ast::Expr,
    evaluate_source,
    interpreter::{
        evaluator::{
            core::Context,
            function::core::{Arity, BUILTIN_FUNCTIONS},
        },
        parser::core::{parse, validate_ast},
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_expr_blocks(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate_source(&code, None).unwrap_or_else(|e| {
                             panic!("Example {} in {:?} failed to parse:\n{}\nError: {}",
                                    i + 1,
                                    path,
                                    code,
                                    e)
                         });
            if let Some(message) = result.error_message() {
                panic!("Example {} in {:?} failed to evaluate:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       message);
            }
        }
    }

    assert!(count > 0, "No expression examples found in book/src");
}

fn extract_expr_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```expreval") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(source: &str, expected: f64) {
    let result =
        evaluate_source(source, None).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"));

    match result.into_result() {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{source}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{source}' failed to evaluate: {e}"),
    }
}

fn assert_close(source: &str, expected: f64, tolerance: f64) {
    let result =
        evaluate_source(source, None).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"));
    let value = result.into_result()
                      .unwrap_or_else(|e| panic!("'{source}' failed to evaluate: {e}"));

    assert!((value - expected).abs() < tolerance,
            "'{source}' evaluated to {value}, expected {expected} within {tolerance}");
}

fn assert_parse_error(source: &str) {
    assert!(evaluate_source(source, None).is_err(),
            "'{source}' parsed but was expected to fail");
}

fn assert_eval_error(source: &str, needle: &str) {
    let result =
        evaluate_source(source, None).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"));
    let message = result.error_message()
                        .unwrap_or_else(|| panic!("'{source}' succeeded but was expected to fail"));

    assert!(message.to_lowercase().contains(&needle.to_lowercase()),
            "'{source}' failed with '{message}', expected a mention of '{needle}'");
}

#[test]
fn basic_arithmetic_and_associativity() {
    assert_value("1 + 2", 3.0);
    assert_value("10 - 5 - 2", 3.0);
    assert_value("20 / 2 / 5", 2.0);
    assert_value("2 * 3 * 4", 24.0);
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ** 3 ** 2", 512.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 ** 3 ^ 2", 512.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 ** 2", 18.0);
    assert_value("-2 ** 2", 4.0);
    assert_value("2 + 3 * 4 ** 2", 50.0);
}

#[test]
fn floor_division() {
    assert_value("7 // 2", 3.0);
    assert_value("-7 // 2", -4.0);
    assert_value("7.5 // 0.5", 15.0);
}

#[test]
fn unary_operators() {
    assert_value("--5", 5.0);
    assert_value("+-5", -5.0);
    assert_value("-(2 + 3)", -5.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value("1.5e3", 1500.0);
    assert_value(".5", 0.5);
    assert_value("2e3", 2000.0);
    assert_value("  2  ", 2.0);
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_eval_error("5 / 0", "Division by zero");
    assert_eval_error("5 // 0", "Division by zero");
    assert_eval_error("5 % 0", "Modulo by zero");
}

#[test]
fn power_domain_errors() {
    assert_eval_error("0 ** -1", "Zero to negative power is undefined");
    assert_eval_error("(-2) ** 0.5", "Negative base with non-integer exponent");
}

#[test]
fn function_domain_errors() {
    assert_eval_error("sqrt(-1)", "Square root of negative number");
    assert_eval_error("log(0)", "non-positive");
    assert_eval_error("ln(-3)", "non-positive");
    assert_eval_error("asin(2)", "Inverse sine");
    assert_eval_error("acos(-2)", "Inverse cosine");
    assert_eval_error("factorial(-1)", "negative");
    assert_eval_error("factorial(2.5)", "non-integer");
}

#[test]
fn arithmetic_overflow_is_reported() {
    assert_eval_error("1e308 * 10", "Mathematical error");
    assert_eval_error("2 ** 10000", "Mathematical error");
    assert_eval_error("exp(1000)", "Mathematical error");
    assert_eval_error("factorial(171)", "Mathematical error");
}

#[test]
fn unknown_names_fail() {
    assert_eval_error("undefined_var", "undefined");
    assert_eval_error("nope(1)", "Unknown function");
    assert_eval_error("f()", "Unknown function");
}

#[test]
fn malformed_inputs_fail_parsing() {
    assert_parse_error("");
    assert_parse_error("2 +");
    assert_parse_error("* 3");
    assert_parse_error("2 3");
    assert_parse_error("((2)");
    assert_parse_error("2))");
    assert_parse_error("2 $ 2");
    assert_parse_error("1e999");
    assert_parse_error("f(1,)");
}

#[test]
fn builtin_functions_evaluate() {
    assert_value("abs(-5)", 5.0);
    assert_value("round(3.7)", 4.0);
    assert_value("floor(3.7)", 3.0);
    assert_value("ceil(3.2)", 4.0);
    assert_value("int(3.9)", 3.0);
    assert_value("float(2)", 2.0);
    assert_value("sqrt(9)", 3.0);
    assert_value("exp(0)", 1.0);
    assert_value("ln(e)", 1.0);
    assert_value("log(e)", 1.0);
    assert_value("log10(1000)", 3.0);
    assert_value("log2(8)", 3.0);
    assert_value("factorial(5)", 120.0);
    assert_value("degrees(pi)", 180.0);
    assert_close("radians(180)", std::f64::consts::PI, 1e-12);
    assert_value("atan2(0, 1)", 0.0);
    assert_value("pow(2, 10)", 1024.0);
    assert_value("sin(0)", 0.0);
    assert_close("tanh(0)", 0.0, 1e-12);
}

#[test]
fn variadic_functions() {
    assert_value("min(3, 1, 2)", 1.0);
    assert_value("max(3, 1, 2)", 3.0);
    assert_value("min(7)", 7.0);
    assert_value("sum(1, 2, 3, 4)", 10.0);
}

#[test]
fn arity_mismatches_fail() {
    assert_eval_error("sin(1, 2)", "expects 1 argument");
    assert_eval_error("atan2(1)", "expects 2 argument");
    assert_eval_error("min()", "at least 1");
}

#[test]
fn trigonometric_scenario() {
    assert_close("sin(pi/4) + cos(pi/4)", 1.414_213_562_4, 1e-10);
}

#[test]
fn constants_resolve() {
    assert_close("pi", std::f64::consts::PI, 1e-15);
    assert_close("tau", std::f64::consts::TAU, 1e-15);
    assert_close("e", std::f64::consts::E, 1e-15);

    let result = evaluate_source("inf", None).unwrap();
    assert!(result.value().unwrap().is_infinite());
}

#[test]
fn call_bindings_overlay_variables() {
    let bindings = HashMap::from([("x".to_string(), 10.0), ("y".to_string(), 5.0)]);
    let result = evaluate_source("x * y", Some(&bindings)).unwrap();

    assert_eq!(result.into_result().unwrap(), 50.0);
}

#[test]
fn context_variable_api() {
    let mut context = Context::new();
    context.set_variable("x", 4.0);

    assert_eq!(context.get_variable("x"), Ok(4.0));

    let expr = parse("x ** 2").unwrap();
    assert_eq!(context.evaluate(&expr, None).value(), Some(16.0));

    context.clear_variables();
    assert!(context.get_variable("x").is_err());
    assert!(!context.evaluate(&expr, None).is_ok());
}

#[test]
fn registered_constants_and_functions() {
    let mut context = Context::new();
    context.register_constant("phi", 1.618_033_988_749_895);
    context.register_function("double", Arity::Exact(1), |args, _position| Ok(args[0] * 2.0));

    let expr = parse("double(phi)").unwrap();
    let value = context.evaluate(&expr, None).value().unwrap();

    assert!((value - 3.236_067_977_499_79).abs() < 1e-12);
}

#[test]
fn every_builtin_is_registered() {
    let context = Context::new();

    for name in BUILTIN_FUNCTIONS {
        assert!(context.lookup_function(name).is_ok(),
                "builtin '{name}' is not registered");
    }
}

#[test]
fn recursion_depth_limit_fires() {
    let source = format!("{}1", "-".repeat(1001));
    assert_eval_error(&source, "recursion depth");
}

#[test]
fn execution_time_limit_fires() {
    let mut context = Context::new();
    context.max_execution_time = Duration::ZERO;

    let expr = parse("1 + 1").unwrap();
    let message = context.evaluate(&expr, None).error_message().unwrap();

    assert!(message.contains("execution time"));
}

#[test]
fn failed_evaluations_carry_timing_and_position() {
    let result = evaluate_source("1 / 0", None).unwrap();

    assert!(!result.is_ok());
    assert_eq!(result.position(), Some(2));
    assert!(result.execution_time() <= Duration::from_secs(1));
}

#[test]
fn serialized_trees_reparse_identically() {
    let sources = ["1 + 2 * 3",
                   "2 ** 3 ** 2",
                   "-x + +y",
                   "sin(pi / 4) + cos(pi / 4)",
                   "min(1, 2, max(3, 4))",
                   "(a + b) * (c - d) // 2 % 3"];

    for source in sources {
        let first = parse(source).unwrap().to_string();
        let second = parse(&first).unwrap().to_string();

        assert_eq!(first, second, "round trip diverged for '{source}'");
    }
}

#[test]
fn validate_ast_checks_structure() {
    let good = parse("sin(1) + 2").unwrap();
    assert!(validate_ast(&good).is_ok());

    let bad = Expr::FunctionCall { name:      String::new(),
                                   arguments: vec![],
                                   position:  0, };
    assert!(validate_ast(&bad).is_err());

    let bad = Expr::Number { value:    f64::NAN,
                             position: 0, };
    assert!(validate_ast(&bad).is_err());
}

#[test]
fn example_file_evaluates() {
    let contents = fs::read_to_string("tests/example.expr").expect("missing file");
    let result = evaluate_source(&contents, None).unwrap();

    assert_eq!(result.into_result().unwrap(), 3.0);
}
