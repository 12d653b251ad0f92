//! Read postfix expressions from standard input, one per line, and print each
//! result in infix form followed by the final symbol table.
//!
//! Example usage:
//!
//!     echo "x 3 4 + <-" | cargo run -- --symtab-filepath symbols.txt

use clap::Parser;
use rust_postfix_interp::end_to_end::{run_interpreter, InterpreterConfig};

fn main() {
    let interpreter_config = InterpreterConfig::parse();

    let interpreter_result = run_interpreter(&interpreter_config);

    if let Err(run_error) = interpreter_result {
        eprintln!("{}", run_error);
        std::process::exit(1);
    }
}
