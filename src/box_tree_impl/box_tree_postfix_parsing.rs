//! Parser that constructs box-tree expressions from the tokens of a postfix
//! expression by popping them off a token stack.

use thiserror::Error;

use crate::box_tree_impl::box_tree_ast::{ExprNode, LeafKind, Operator};
use crate::lexical_analysis::{classify_token, run_lexical_analysis, TokenClass};
use crate::token_stack::TokenStack;

/// Represents a parsing error.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ParseError {
    #[error("Too few tokens in postfix expression.")]
    TooFewTokens,

    #[error("Too many tokens in postfix expression.")]
    TooManyTokens,

    #[error("Illegal token {token_text:?} in postfix expression.")]
    IllegalToken { token_text: String },

    #[error("Postfix expression nests deeper than {max_depth} levels.")]
    TooDeeplyNested { max_depth: usize },
}

/// Deepest node level a parsed tree may have. Parsing, evaluation, printing and
/// dropping all recurse once per level, so this also bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Pops tokens off the stack and builds one complete subtree whose root sits at
/// `depth`. The first error aborts the build; subtrees built so far are dropped
/// on the way out.
fn build_expr_node(
    token_stack: &mut TokenStack,
    depth: usize,
) -> Result<Box<ExprNode>, ParseError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::TooDeeplyNested {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    let token_text = token_stack.pop().ok_or(ParseError::TooFewTokens)?;

    match classify_token(token_text.as_str()) {
        TokenClass::Operator => {
            let operator = Operator::from_token_text(token_text.as_str())
                .ok_or_else(|| ParseError::IllegalToken {
                    token_text: token_text.clone(),
                })?;

            if operator == Operator::Conditional {
                // Operands come off the stack last-written first. Both branches
                // hang below the `Alternative` node.
                let false_branch = build_expr_node(token_stack, depth + 2)?;
                let true_branch = build_expr_node(token_stack, depth + 2)?;
                let condition = build_expr_node(token_stack, depth + 1)?;

                return Ok(ExprNode::new_conditional(
                    token_text,
                    condition,
                    true_branch,
                    false_branch,
                ));
            }

            let right = build_expr_node(token_stack, depth + 1)?;
            let left = build_expr_node(token_stack, depth + 1)?;

            return Ok(ExprNode::new_interior(operator, token_text, left, right));
        }

        TokenClass::Integer => {
            return Ok(ExprNode::new_leaf(LeafKind::Integer, token_text));
        }

        TokenClass::Symbol => {
            return Ok(ExprNode::new_leaf(LeafKind::Symbol, token_text));
        }

        TokenClass::Illegal => {
            return Err(ParseError::IllegalToken {
                token_text: token_text,
            });
        }
    };
}

/// Parses an already tokenized postfix expression. The stack must hold exactly
/// one expression.
pub fn parse_token_stack(mut token_stack: TokenStack) -> Result<Box<ExprNode>, ParseError> {
    if token_stack.is_empty() {
        return Err(ParseError::TooFewTokens);
    }

    let expr_node = build_expr_node(&mut token_stack, 0)?;

    if !token_stack.is_empty() {
        return Err(ParseError::TooManyTokens);
    }

    return Ok(expr_node);
}

/// Tokenizes and parses one postfix expression into a box tree.
pub fn parse_postfix_expression(expression_str: &str) -> Result<Box<ExprNode>, ParseError> {
    let tokens = run_lexical_analysis(expression_str);

    return parse_token_stack(TokenStack::from_tokens(tokens));
}
