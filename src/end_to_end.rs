//! Code to configure the interpreter and run it over lines of postfix
//! expressions.

use std::fs;
use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;
use thiserror::Error;

use crate::box_tree_impl::box_tree_ast::ExprNode;
use crate::box_tree_impl::box_tree_execution::{execute_expression, EvalError};
use crate::box_tree_impl::box_tree_postfix_parsing::{parse_postfix_expression, ParseError};
use crate::symbol_table::{SymbolTable, SymbolTableLoadError, Value};

/// Config for the interpreter. Instantiate via `InterpreterConfig::parse()`.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct InterpreterConfig {
    /// Symbol table file of `<name> <integer>` lines to load before reading
    /// expressions.
    #[arg(short, long)]
    pub symtab_filepath: Option<String>,

    /// Maximum number of symbols the table may hold. Unbounded if absent.
    #[arg(short, long)]
    pub max_symbols: Option<usize>,

    /// Trace evaluation and report rejected expressions on standard error.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Why a single expression produced no result.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum InterpretError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Errors that may be thrown when running the interpreter.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Symbol table file error: {0}")]
    SymbolTableFile(#[from] SymbolTableLoadError),
}

/// The outcome of one successfully evaluated expression.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Evaluation {
    pub expr_node: Box<ExprNode>,
    pub value: Value,
}

/// Output line format for an evaluation.
impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{} = {}", self.expr_node, self.value);
    }
}

/// Runs the parser and evaluator on one expression.
pub fn interpret_line(
    line: &str,
    symbol_table: &mut SymbolTable,
    verbose: bool,
) -> Result<Evaluation, InterpretError> {
    let expr_node = parse_postfix_expression(line)?;

    if verbose {
        eprintln!("Parsed {:?} into {} nodes.", line, expr_node.node_count());
    }

    let value = execute_expression(&expr_node, symbol_table, verbose)?;

    return Ok(Evaluation {
        expr_node: expr_node,
        value: value,
    });
}

/// Parses, evaluates and prints one expression. Writes `<infix> = <value>` on
/// success and nothing on a parse or evaluation error. Only failures to write
/// are returned as errors.
pub fn evaluate_and_print(
    line: &str,
    symbol_table: &mut SymbolTable,
    out: &mut impl Write,
    verbose: bool,
) -> std::io::Result<()> {
    match interpret_line(line, symbol_table, verbose) {
        Ok(evaluation) => {
            writeln!(out, "{}", evaluation)?;
        }

        Err(interpret_error) => {
            if verbose {
                eprintln!("Rejected {:?}: {}", line, interpret_error);
            }
        }
    }

    return Ok(());
}

/// Strips a `#` comment and surrounding whitespace. Returns `None` if nothing
/// is left to evaluate.
pub fn strip_comment(line: &str) -> Option<&str> {
    let code = match line.find('#') {
        Some(comment_idx) => &line[..comment_idx],
        None => line,
    };

    let code = code.trim();

    if code.is_empty() {
        return None;
    }

    return Some(code);
}

/// Builds the symbol table described by the config, loading its file if one is
/// given.
pub fn build_symbol_table(config: &InterpreterConfig) -> Result<SymbolTable, RunError> {
    let mut symbol_table = match config.max_symbols {
        Some(max_symbols) => SymbolTable::with_capacity_limit(max_symbols),
        None => SymbolTable::new(),
    };

    if let Some(symtab_filepath) = &config.symtab_filepath {
        let table_string = fs::read_to_string(symtab_filepath)?;
        symbol_table.load_from_str(table_string.as_str())?;
    }

    return Ok(symbol_table);
}

/// Evaluates every line of `input`, then dumps the symbol table. A `> ` prompt
/// is written before each line when `interactive` is set.
pub fn run_repl(
    mut input: impl BufRead,
    out: &mut impl Write,
    symbol_table: &mut SymbolTable,
    interactive: bool,
    verbose: bool,
) -> Result<(), RunError> {
    let mut line_bytes: Vec<u8> = Vec::new();

    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        line_bytes.clear();
        if input.read_until(b'\n', &mut line_bytes)? == 0 {
            break;
        }

        // Bytes that are not UTF-8 become U+FFFD and fail later as illegal
        // tokens, so one bad line never ends the session.
        let line = String::from_utf8_lossy(&line_bytes);

        if let Some(expression_str) = strip_comment(&line) {
            evaluate_and_print(expression_str, symbol_table, out, verbose)?;
        }
    }

    write!(out, "{}", symbol_table)?;
    out.flush()?;

    return Ok(());
}

/// Run the interpreter on standard input based on the given config.
pub fn run_interpreter(config: &InterpreterConfig) -> Result<(), RunError> {
    let mut symbol_table = build_symbol_table(config)?;

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = std::io::stdout().lock();

    return run_repl(
        stdin.lock(),
        &mut stdout,
        &mut symbol_table,
        interactive,
        config.verbose,
    );
}
