//! Classified expressions: the tree, the classifier and its inverse

pub mod analysis;
pub mod ast;
pub mod classify;
pub mod printer;

pub use analysis::{depth, free_variables, is_closed, node_count};
pub use ast::Expression;
pub use classify::{classify, Classifier, FN_MARKER};
pub use printer::to_raw;
