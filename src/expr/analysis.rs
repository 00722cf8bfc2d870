//! Structural queries over expression trees
//!
//! All walks use an explicit stack, so they are safe on trees nested deeper
//! than the call stack allows.

use indexmap::IndexSet;

use super::ast::Expression;
use crate::syntax::Symbol;

/// Free variables in order of first occurrence (left to right)
pub fn free_variables(expr: &Expression) -> IndexSet<Symbol> {
    let mut free = IndexSet::new();
    // each entry carries the parameters bound above it
    let mut stack: Vec<(&Expression, Vec<&Symbol>)> = vec![(expr, Vec::new())];

    while let Some((node, bound)) = stack.pop() {
        match node {
            Expression::Variable { name } => {
                if !bound.contains(&name) {
                    free.insert(name.clone());
                }
            }
            Expression::FunctionLiteral { parameter, body } => {
                let mut inner = bound;
                inner.push(parameter);
                stack.push((body, inner));
            }
            Expression::Application { operator, operand } => {
                // operand first so the operator is visited first
                stack.push((operand, bound.clone()));
                stack.push((operator, bound));
            }
        }
    }

    free
}

/// True when the expression has no free variables
pub fn is_closed(expr: &Expression) -> bool {
    free_variables(expr).is_empty()
}

/// Number of nodes in the tree
pub fn node_count(expr: &Expression) -> usize {
    let mut count = 0;
    let mut stack = vec![expr];

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children());
    }

    count
}

/// Length of the longest root-to-leaf path, counted in nodes
pub fn depth(expr: &Expression) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(expr, 1)];

    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        for child in node.children() {
            stack.push((child, level + 1));
        }
    }

    deepest
}
