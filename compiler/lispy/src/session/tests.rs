use super::*;
use crate::output::buffer_output;
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn session() -> Session {
    Session::new(buffer_output())
}

#[test]
fn eval_line_prints_result() {
    let session = session();
    let value = session.eval_line("+ 1 2").expect("parses");
    assert_eq!(value, Value::number(3));
    assert_eq!(session.output().contents(), "3\n");
}

#[test]
fn definitions_persist_between_lines() {
    let session = session();
    session.eval_line("def {x} 10").expect("parses");
    session.eval_line("* x 2").expect("parses");
    assert_eq!(session.output().contents(), "()\n20\n");
}

#[test]
fn evaluation_errors_are_values() {
    let session = session();
    let value = session.eval_line("/ 1 0").expect("parses");
    assert!(value.is_error());
    assert_eq!(session.output().contents(), "Error: Division by zero!\n");
}

#[test]
fn parse_errors_carry_location() {
    let session = session();
    let err = session.eval_line("+ 1 {2").map(|_| ());
    let Err(err) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(err.to_string(), "<input>:1:5: unclosed `{`");
    assert_eq!(session.output().contents(), "");
}

#[test]
fn program_evaluates_each_expression() {
    let session = session();
    let source = "\
; a small program
(def {double} (\\ {x} {* x 2}))
(double 21)
{not evaluated}
";
    let results = session.eval_program("prog.lspy", source).expect("parses");
    assert_eq!(results.len(), 3);
    assert_eq!(
        session.output().contents(),
        "()\n42\n{not evaluated}\n"
    );
}

#[test]
fn program_parse_error_reports_line() {
    let session = session();
    let err = session.eval_program("prog.lspy", "(+ 1 2)\n(+ 3 4))").map(|_| ());
    let Err(err) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(
        err.to_string(),
        "prog.lspy:2:8: unexpected `)` with no matching opener"
    );
}

#[test]
fn missing_file_is_read_error() {
    let session = session();
    let err = session.eval_file(Path::new("/nonexistent/lispy/file.lspy"));
    assert!(matches!(err, Err(DriverError::Read { .. })));
}

#[test]
fn repl_prints_banner_prompts_and_results() {
    let session = session();
    let input = Cursor::new("+ 1 2\nhead {1 2}\n");
    session.run_repl(input, false).expect("no i/o failure");
    assert_eq!(
        session.output().contents(),
        format!(
            "Lispy version {}\nPress Ctrl+D to exit\n\nlispy> 3\nlispy> {{1}}\nlispy> \n",
            env!("CARGO_PKG_VERSION")
        )
    );
}

#[test]
fn repl_continues_after_parse_error() {
    let session = session();
    let input = Cursor::new("(+ 1\n+ 1 1\n");
    session.run_repl(input, true).expect("no i/o failure");
    assert_eq!(
        session.output().contents(),
        "lispy> <input>:1:1: unclosed `(`\nlispy> 2\nlispy> \n"
    );
}

#[test]
fn deeply_nested_input_evaluates() {
    let session = session();
    let depth = 200_000;
    let line = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let value = session.eval_line(&line).expect("parses");
    assert_eq!(value, Value::number(1));
    assert_eq!(session.output().contents(), "1\n");
}

#[test]
fn deeply_nested_result_prints() {
    let session = session();
    let depth = 200_000;
    let line = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    let value = session.eval_line(&line).expect("parses");
    assert_eq!(value.type_name(), "Q-Expression");
    let printed = session.output().contents();
    assert_eq!(printed.len(), 2 * depth + 1);
    assert!(printed.starts_with("{{{") && printed.ends_with("}}}\n"));
}
