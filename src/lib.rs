//! This crate contains code for a postfix expression interpreter.

pub mod box_tree_impl;
pub mod end_to_end;
pub mod lexical_analysis;
pub mod symbol_table;
pub mod token_stack;
