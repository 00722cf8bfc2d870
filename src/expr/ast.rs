//! Classified expression tree
//!
//! Each node owns its children; trees are never shared or cyclic.

use serde::{Deserialize, Serialize};

use crate::syntax::Symbol;

/// A classified expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Variable reference
    Variable { name: Symbol },
    /// Single-parameter function literal
    FunctionLiteral {
        parameter: Symbol,
        body: Box<Expression>,
    },
    /// Application of an operator to one operand
    Application {
        operator: Box<Expression>,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn variable(name: impl Into<Symbol>) -> Self {
        Expression::Variable { name: name.into() }
    }

    pub fn function(parameter: impl Into<Symbol>, body: Expression) -> Self {
        Expression::FunctionLiteral {
            parameter: parameter.into(),
            body: Box::new(body),
        }
    }

    pub fn application(operator: Expression, operand: Expression) -> Self {
        Expression::Application {
            operator: Box::new(operator),
            operand: Box::new(operand),
        }
    }

    /// Name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Variable { .. } => "Variable",
            Expression::FunctionLiteral { .. } => "FunctionLiteral",
            Expression::Application { .. } => "Application",
        }
    }

    /// Direct children, left to right
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Variable { .. } => Vec::new(),
            Expression::FunctionLiteral { body, .. } => vec![body],
            Expression::Application { operator, operand } => vec![operator, operand],
        }
    }
}
