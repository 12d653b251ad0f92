//! Evaluates postfix expressions given in the box-tree representation against a
//! symbol table.

use thiserror::Error;

use crate::box_tree_impl::box_tree_ast::{ExprNode, LeafKind, Operator};
use crate::symbol_table::{SymbolTable, Value};

/// Represents an evaluation error.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum EvalError {
    #[error("Undefined symbol {var_name:?}.")]
    UndefinedSymbol { var_name: String },

    #[error("Invalid assignment target {target_text:?}; only a symbol can be assigned.")]
    InvalidLvalue { target_text: String },

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Invalid modulus by zero.")]
    InvalidModulus,

    #[error("Unable to create symbol {var_name:?}: symbol table is full.")]
    SymbolTableFull { var_name: String },

    #[error("Unknown operation {token_text:?}.")]
    UnknownOperation { token_text: String },
}

// Reads an integer literal. Out-of-range literals saturate at the bounds of
// `Value`.
fn parse_integer_literal(token_text: &str) -> Value {
    match token_text.parse::<Value>() {
        Ok(value) => return value,
        Err(_) if token_text.starts_with('-') => return Value::MIN,
        Err(_) => return Value::MAX,
    };
}

// Error for a node the evaluator has no rule for.
fn unknown_operation(expr_node: &ExprNode) -> EvalError {
    return EvalError::UnknownOperation {
        token_text: String::from(expr_node.token_text()),
    };
}

// Applies an arithmetic operator to already evaluated operands.
fn apply_arithmetic(
    expr_node: &ExprNode,
    operator: Operator,
    left_value: Value,
    right_value: Value,
) -> Result<Value, EvalError> {
    match operator {
        Operator::Add => return Ok(left_value.wrapping_add(right_value)),
        Operator::Sub => return Ok(left_value.wrapping_sub(right_value)),
        Operator::Mul => return Ok(left_value.wrapping_mul(right_value)),
        Operator::Div => {
            if right_value == 0 {
                return Err(EvalError::DivisionByZero);
            }
            return Ok(left_value.wrapping_div(right_value));
        }
        Operator::Mod => {
            if right_value == 0 {
                return Err(EvalError::InvalidModulus);
            }
            return Ok(left_value.wrapping_rem(right_value));
        }
        _ => return Err(unknown_operation(expr_node)),
    };
}

// Evaluates `target <- value_expr`. An undefined symbol on the right-hand side
// assigns 0 instead of failing.
fn eval_assignment(
    target: &ExprNode,
    value_expr: &ExprNode,
    symbol_table: &mut SymbolTable,
    verbose: bool,
) -> Result<Value, EvalError> {
    let var_name = match target {
        ExprNode::Leaf {
            leaf_kind: LeafKind::Symbol,
            token_text,
        } => token_text.as_str(),
        other_node => {
            return Err(EvalError::InvalidLvalue {
                target_text: other_node.to_string(),
            });
        }
    };

    let value = match eval_expr(value_expr, symbol_table, verbose) {
        Ok(value) => value,
        Err(EvalError::UndefinedSymbol { var_name: missing_name }) => {
            if verbose {
                eprintln!("Symbol {} is undefined, assigning 0 to {}.", missing_name, var_name);
            }
            0
        }
        Err(eval_error) => return Err(eval_error),
    };

    return symbol_table
        .create_or_update(var_name, value)
        .map_err(|_| EvalError::SymbolTableFull {
            var_name: String::from(var_name),
        });
}

// Evaluates a conditional. Only the selected branch is visited.
fn eval_conditional(
    conditional: &ExprNode,
    condition: &ExprNode,
    alternative: &ExprNode,
    symbol_table: &mut SymbolTable,
    verbose: bool,
) -> Result<Value, EvalError> {
    let (true_branch, false_branch) = match alternative {
        ExprNode::Interior {
            operator: Operator::Alternative,
            left,
            right,
            ..
        } => (&**left, &**right),
        _ => return Err(unknown_operation(conditional)),
    };

    let condition_value = eval_expr(condition, symbol_table, verbose)?;

    if condition_value != 0 {
        return eval_expr(true_branch, symbol_table, verbose);
    }

    return eval_expr(false_branch, symbol_table, verbose);
}

/// Recursively evaluates an expression tree. The first error stops the walk and
/// is returned unchanged, except for the assignment case handled in
/// `eval_assignment`.
fn eval_expr(
    expr_node: &ExprNode,
    symbol_table: &mut SymbolTable,
    verbose: bool,
) -> Result<Value, EvalError> {
    match expr_node {
        ExprNode::Leaf {
            leaf_kind: LeafKind::Integer,
            token_text,
        } => {
            return Ok(parse_integer_literal(token_text.as_str()));
        }

        ExprNode::Leaf {
            leaf_kind: LeafKind::Symbol,
            token_text,
        } => {
            return symbol_table
                .lookup(token_text.as_str())
                .ok_or_else(|| EvalError::UndefinedSymbol {
                    var_name: token_text.clone(),
                });
        }

        ExprNode::Interior {
            operator,
            left,
            right,
            ..
        } => {
            if verbose {
                eprintln!("In eval_expr, expr_node is {}", expr_node);
            }

            match operator {
                Operator::Assign => return eval_assignment(left, right, symbol_table, verbose),

                Operator::Conditional => {
                    return eval_conditional(expr_node, left, right, symbol_table, verbose);
                }

                Operator::Alternative => return Err(unknown_operation(expr_node)),

                arithmetic_operator => {
                    let left_value = eval_expr(left, symbol_table, verbose)?;
                    let right_value = eval_expr(right, symbol_table, verbose)?;

                    return apply_arithmetic(
                        expr_node,
                        *arithmetic_operator,
                        left_value,
                        right_value,
                    );
                }
            };
        }
    };
}

/// Evaluates one expression tree against the symbol table. Each call starts
/// error-free; assignments made before an error stay in the table.
pub fn execute_expression(
    expr_node: &ExprNode,
    symbol_table: &mut SymbolTable,
    verbose: bool,
) -> Result<Value, EvalError> {
    return eval_expr(expr_node, symbol_table, verbose);
}
