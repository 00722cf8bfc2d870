//! Printer
//!
//! Turns an `Expression` back into `RawInput` and surface text. Printing
//! then classifying yields the same tree.

use std::fmt;

use super::ast::Expression;
use super::classify::FN_MARKER;
use crate::syntax::RawInput;

/// Convert an expression back to its surface form
pub fn to_raw(expr: &Expression) -> RawInput {
    match expr {
        Expression::Variable { name } => RawInput::atom(name.clone()),
        Expression::FunctionLiteral { parameter, body } => RawInput::list(vec![
            RawInput::atom(FN_MARKER),
            RawInput::vector(vec![RawInput::atom(parameter.clone())]),
            to_raw(body),
        ]),
        Expression::Application { operator, operand } => {
            RawInput::list(vec![to_raw(operator), to_raw(operand)])
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable { name } => write!(f, "{}", name),
            Expression::FunctionLiteral { parameter, body } => {
                write!(f, "({} [{}] {})", FN_MARKER, parameter, body)
            }
            Expression::Application { operator, operand } => {
                write!(f, "({} {})", operator, operand)
            }
        }
    }
}
