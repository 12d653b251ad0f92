//! Parser and expression evaluation code that represents postfix expressions as
//! a tree where each node references its children via `Box` smart pointers.

pub mod box_tree_ast;
pub mod box_tree_execution;
pub mod box_tree_postfix_parsing;
