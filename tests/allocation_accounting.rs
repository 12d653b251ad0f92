//! Checks that every path through the parser and evaluator releases all the
//! memory it allocates. Allocations are counted per thread so the test harness
//! cannot disturb the numbers.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use rust_postfix_interp::box_tree_impl::box_tree_execution::execute_expression;
use rust_postfix_interp::box_tree_impl::box_tree_postfix_parsing::parse_postfix_expression;
use rust_postfix_interp::symbol_table::SymbolTable;

struct CountingAllocator;

thread_local! {
    static LIVE_ALLOCATIONS: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE_ALLOCATIONS.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE_ALLOCATIONS.try_with(|live| live.set(live.get() - 1));
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

fn live_allocations() -> isize {
    return LIVE_ALLOCATIONS.with(|live| live.get());
}

const MALFORMED_EXPRESSIONS: [&str; 8] = [
    "+",
    "3 +",
    "3 4 + 5",
    "3 @",
    "a b ?",
    "x 1 2 3 ? ? <-",
    "1 2 3 4 5 6 7 + + +",
    "c a b 1 <- $ ?",
];

const FAILING_EVALUATIONS: [&str; 5] = [
    "1 0 /",
    "x 1 0 % <-",
    "3 x 4 <- <-",
    "undefined 1 2 ?",
    "2 3 * 4 5 + 0 * /",
];

// Test if failed parses drop every partially built subtree.
#[test]
fn test_failed_parses_release_every_node() {
    // Warm up lazily initialized statics and regex caches before measuring.
    for _ in 0..2 {
        for expression_str in MALFORMED_EXPRESSIONS {
            let _ = parse_postfix_expression(expression_str);
        }
    }

    for expression_str in MALFORMED_EXPRESSIONS {
        let live_before = live_allocations();

        let parse_result = parse_postfix_expression(expression_str);
        assert!(parse_result.is_err());
        drop(parse_result);

        assert_eq!(live_allocations(), live_before, "Leak while parsing {:?}", expression_str);
    }
}

// Test if trees are fully released after failed and successful evaluations.
#[test]
fn test_evaluated_trees_release_every_node() {
    let mut symbol_table = SymbolTable::new();
    symbol_table.create_or_update("x", 1).expect("Unable to create x.");

    for _ in 0..2 {
        for expression_str in FAILING_EVALUATIONS.iter().chain(["x 2 <-", "x 3 *"].iter()) {
            let _ = parse_postfix_expression(expression_str);
        }
    }

    for expression_str in FAILING_EVALUATIONS.iter().chain(["x 2 <-", "x 3 *"].iter()) {
        let live_before = live_allocations();

        let expr_node =
            parse_postfix_expression(expression_str).expect("Unable to parse expression string.");
        let eval_result = execute_expression(&expr_node, &mut symbol_table, false);
        drop(eval_result);
        drop(expr_node);

        assert_eq!(live_allocations(), live_before, "Leak while evaluating {:?}", expression_str);
    }
}
