//! Expression classifier
//!
//! Maps `RawInput` onto `Expression` by shape. Rules are tried in order and
//! the first match wins:
//!
//! 1. an atom is a variable reference
//! 2. `(fn [p] body)` is a function literal with the single parameter `p`
//! 3. `(f a)` is an application
//! 4. anything else is rejected with the offending subtree
//!
//! Classification is fail-fast: the first bad subtree aborts the whole input.

use tracing::{debug, trace};

use super::ast::Expression;
use crate::config::{Config, DEFAULT_MAX_DEPTH};
use crate::error::{Error, Result};
use crate::syntax::RawInput;

/// Symbol that heads a function literal
pub const FN_MARKER: &str = "fn";

/// Classifier with a nesting limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    max_depth: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier using `config.max_depth` (at least 1)
    pub fn with_config(config: &Config) -> Self {
        Self {
            max_depth: config.max_depth.max(1),
        }
    }

    /// Classify a whole input tree
    pub fn classify(&self, input: &RawInput) -> Result<Expression> {
        self.classify_at(input, 0)
    }

    fn classify_at(&self, input: &RawInput, depth: usize) -> Result<Expression> {
        trace!(depth, %input, "classify");

        let items = match input {
            RawInput::Atom { symbol } => {
                return Ok(Expression::Variable {
                    name: symbol.clone(),
                })
            }
            RawInput::Seq { items, .. } => items,
        };

        if depth >= self.max_depth {
            return Err(Error::NestingTooDeep(self.max_depth));
        }

        match items.as_slice() {
            [marker, params, body] if marker.is_symbol(FN_MARKER) => {
                // the parameter list is a nesting level of its own, as in the reader
                if params.as_items().is_some() && depth + 1 >= self.max_depth {
                    return Err(Error::NestingTooDeep(self.max_depth));
                }

                match params.as_items() {
                    Some([RawInput::Atom { symbol }]) => Ok(Expression::FunctionLiteral {
                        parameter: symbol.clone(),
                        body: Box::new(self.classify_at(body, depth + 1)?),
                    }),
                    // Multi-parameter and non-symbol parameter forms are not
                    // function literals, and a three-element list is never an
                    // application either.
                    _ => {
                        debug!(%input, "parameter list must be exactly one symbol");
                        Err(Error::InvalidExpression(input.clone()))
                    }
                }
            }
            [operator, operand] => Ok(Expression::Application {
                operator: Box::new(self.classify_at(operator, depth + 1)?),
                operand: Box::new(self.classify_at(operand, depth + 1)?),
            }),
            _ => {
                debug!(%input, len = items.len(), "no rule matches");
                Err(Error::InvalidExpression(input.clone()))
            }
        }
    }
}

/// Classify with the default nesting limit
pub fn classify(input: &RawInput) -> Result<Expression> {
    Classifier::default().classify(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::read_str;

    fn classify_text(text: &str) -> Result<Expression> {
        classify(&read_str(text).unwrap())
    }

    fn var(name: &str) -> Expression {
        Expression::variable(name)
    }

    #[test]
    fn test_atom_is_variable() {
        assert_eq!(classify_text("a").unwrap(), var("a"));
        // the marker alone is just a variable
        assert_eq!(classify_text("fn").unwrap(), var("fn"));
    }

    #[test]
    fn test_function_literal() {
        assert_eq!(
            classify_text("(fn [x] x)").unwrap(),
            Expression::function("x", var("x"))
        );
    }

    #[test]
    fn test_delimiters_are_interchangeable() {
        assert_eq!(
            classify_text("(fn (x) x)").unwrap(),
            classify_text("[fn [x] x]").unwrap()
        );
    }

    #[test]
    fn test_application() {
        assert_eq!(
            classify_text("((fn [x] x) a)").unwrap(),
            Expression::application(Expression::function("x", var("x")), var("a"))
        );
    }

    #[test]
    fn test_two_element_fn_form_is_application() {
        // `(fn x)` has two elements, so rule 3 applies
        assert_eq!(
            classify_text("(fn x)").unwrap(),
            Expression::application(var("fn"), var("x"))
        );
    }

    #[test]
    fn test_multi_parameter_rejected() {
        let input = read_str("(fn [x y] x)").unwrap();
        assert_eq!(
            classify(&input).unwrap_err(),
            Error::InvalidExpression(input)
        );
    }

    #[test]
    fn test_zero_parameter_and_nested_parameter_rejected() {
        assert!(matches!(
            classify_text("(fn [] x)"),
            Err(Error::InvalidExpression(_))
        ));
        assert!(matches!(
            classify_text("(fn [[x]] x)"),
            Err(Error::InvalidExpression(_))
        ));
        assert!(matches!(
            classify_text("(fn x x)"),
            Err(Error::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let empty = RawInput::list(vec![]);
        assert_eq!(
            classify(&empty).unwrap_err(),
            Error::InvalidExpression(empty.clone())
        );
        assert!(matches!(
            classify_text("(f)"),
            Err(Error::InvalidExpression(_))
        ));
        assert!(matches!(
            classify_text("(f a b)"),
            Err(Error::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_error_reports_innermost_subtree() {
        let err = classify_text("(f (fn [x y] x))").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidExpression(read_str("(fn [x y] x)").unwrap())
        );
        assert_eq!(
            err.to_string(),
            "Classify error: invalid expression (fn [x y] x)"
        );
    }

    #[test]
    fn test_fails_fast_on_operator() {
        // the operator is visited first, so its error wins
        let err = classify_text("(() (a b c))").unwrap_err();
        assert_eq!(err, Error::InvalidExpression(RawInput::list(vec![])));
    }

    #[test]
    fn test_depth_limit() {
        let input = read_str("(f (g (h a)))").unwrap();
        let shallow = Classifier::with_config(&Config::new().max_depth(2));
        assert_eq!(
            shallow.classify(&input).unwrap_err(),
            Error::NestingTooDeep(2)
        );

        let enough = Classifier::with_config(&Config::new().max_depth(3));
        assert!(enough.classify(&input).is_ok());
    }

    #[test]
    fn test_parameter_list_counts_as_nesting() {
        let input = read_str("(fn [x] x)").unwrap();

        let flat = Classifier::with_config(&Config::new().max_depth(1));
        assert_eq!(flat.classify(&input).unwrap_err(), Error::NestingTooDeep(1));

        let nested = Classifier::with_config(&Config::new().max_depth(2));
        assert_eq!(
            nested.classify(&input).unwrap(),
            Expression::function("x", var("x"))
        );
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        let config = Config {
            max_depth: 0,
            ..Config::default()
        };
        let classifier = Classifier::with_config(&config);
        assert_eq!(
            classifier.classify(&read_str("(f a)").unwrap()).unwrap(),
            Expression::application(var("f"), var("a"))
        );
    }
}
