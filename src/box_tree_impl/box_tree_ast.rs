/// Data structures to represent postfix expressions as a tree, and some utility
/// functions to display and re-encode them.
use std::fmt::Display;

/// Kind of value a leaf stands for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LeafKind {
    Integer,
    Symbol,
}

/// Operator carried by an interior node. `Alternative` only ever appears as the
/// right child of a `Conditional`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Assign,
    Conditional,
    Alternative,
}

impl Operator {
    /// Maps an operator token to its tag. Returns `None` for anything that is not
    /// an operator token.
    pub fn from_token_text(token_text: &str) -> Option<Operator> {
        match token_text {
            "+" => return Some(Operator::Add),
            "-" => return Some(Operator::Sub),
            "*" => return Some(Operator::Mul),
            "/" => return Some(Operator::Div),
            "%" => return Some(Operator::Mod),
            "<-" => return Some(Operator::Assign),
            "?" => return Some(Operator::Conditional),
            _ => return None,
        };
    }

    /// Symbol used when printing in infix form.
    pub fn infix_symbol(&self) -> &'static str {
        match self {
            Operator::Add => return "+",
            Operator::Sub => return "-",
            Operator::Mul => return "*",
            Operator::Div => return "/",
            Operator::Mod => return "%",
            Operator::Assign => return "=",
            Operator::Conditional => return "?",
            Operator::Alternative => return ":",
        };
    }

    /// Token used when writing in postfix form.
    pub fn postfix_token(&self) -> &'static str {
        match self {
            Operator::Assign => return "<-",
            other_operator => return other_operator.infix_symbol(),
        };
    }
}

/// Represents a postfix expression. Every node exclusively owns its children.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ExprNode {
    Leaf {
        leaf_kind: LeafKind,
        token_text: String,
    },
    Interior {
        operator: Operator,
        token_text: String,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    pub fn new_leaf(leaf_kind: LeafKind, token_text: String) -> Box<ExprNode> {
        return Box::new(ExprNode::Leaf {
            leaf_kind: leaf_kind,
            token_text: token_text,
        });
    }

    pub fn new_interior(
        operator: Operator,
        token_text: String,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    ) -> Box<ExprNode> {
        return Box::new(ExprNode::Interior {
            operator: operator,
            token_text: token_text,
            left: left,
            right: right,
        });
    }

    /// Builds the `Conditional` node together with its `Alternative` child.
    pub fn new_conditional(
        token_text: String,
        condition: Box<ExprNode>,
        true_branch: Box<ExprNode>,
        false_branch: Box<ExprNode>,
    ) -> Box<ExprNode> {
        let alternative = ExprNode::new_interior(
            Operator::Alternative,
            String::from(Operator::Alternative.infix_symbol()),
            true_branch,
            false_branch,
        );

        return ExprNode::new_interior(Operator::Conditional, token_text, condition, alternative);
    }

    /// Text of the token the node was built from.
    pub fn token_text(&self) -> &str {
        match self {
            ExprNode::Leaf { token_text, .. } => return token_text.as_str(),
            ExprNode::Interior { token_text, .. } => return token_text.as_str(),
        };
    }

    /// Counts the nodes in this subtree, including `Alternative` nodes.
    pub fn node_count(&self) -> usize {
        match self {
            ExprNode::Leaf { .. } => return 1,
            ExprNode::Interior { left, right, .. } => {
                return 1 + left.node_count() + right.node_count();
            }
        };
    }
}

// Helper function to produce the fully parenthesized infix form of an ExprNode.
// A conditional comes out as `(c?(t:f))` because its right child is the
// `Alternative` node.
fn expr_node_to_string_helper(expr_node: &ExprNode, string_so_far: &mut String) {
    match expr_node {
        ExprNode::Leaf { token_text, .. } => {
            string_so_far.push_str(token_text.as_str());
        }
        ExprNode::Interior {
            operator,
            left,
            right,
            ..
        } => {
            string_so_far.push('(');
            expr_node_to_string_helper(left, string_so_far);
            string_so_far.push_str(operator.infix_symbol());
            expr_node_to_string_helper(right, string_so_far);
            string_so_far.push(')');
        }
    };
}

// Converts an expr node to its infix string.
pub fn expr_node_to_string(expr_node: &ExprNode) -> String {
    let mut out_string = String::new();
    expr_node_to_string_helper(expr_node, &mut out_string);
    return out_string;
}

// Helper function to collect the postfix tokens of an ExprNode.
fn expr_node_to_postfix_helper<'a>(expr_node: &'a ExprNode, tokens_so_far: &mut Vec<&'a str>) {
    match expr_node {
        ExprNode::Leaf { token_text, .. } => {
            tokens_so_far.push(token_text.as_str());
        }
        ExprNode::Interior {
            operator: Operator::Conditional,
            left,
            right,
            ..
        } => {
            expr_node_to_postfix_helper(left, tokens_so_far);

            // Written as `condition true_branch false_branch ?`.
            match &**right {
                ExprNode::Interior {
                    operator: Operator::Alternative,
                    left: true_branch,
                    right: false_branch,
                    ..
                } => {
                    expr_node_to_postfix_helper(true_branch, tokens_so_far);
                    expr_node_to_postfix_helper(false_branch, tokens_so_far);
                }
                other_node => {
                    expr_node_to_postfix_helper(other_node, tokens_so_far);
                }
            }

            tokens_so_far.push(Operator::Conditional.postfix_token());
        }
        ExprNode::Interior {
            operator,
            left,
            right,
            ..
        } => {
            expr_node_to_postfix_helper(left, tokens_so_far);
            expr_node_to_postfix_helper(right, tokens_so_far);
            tokens_so_far.push(operator.postfix_token());
        }
    };
}

/// Re-encodes an expr node as space-separated postfix tokens that parse back to
/// an equal tree.
pub fn expr_node_to_postfix(expr_node: &ExprNode) -> String {
    let mut tokens = Vec::new();
    expr_node_to_postfix_helper(expr_node, &mut tokens);
    return tokens.join(" ");
}

// Display trait implementation for ExprNode using expr_node_to_string function.
impl Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", expr_node_to_string(self).as_str());
    }
}
