//! Surface syntax: lexer, reader and the untyped `RawInput` tree

pub mod lexer;
pub mod raw;
pub mod reader;
pub mod token;

pub use lexer::Lexer;
pub use raw::{Delimiter, RawInput, Symbol};
pub use reader::{read_str, Reader};
pub use token::{SpannedToken, Token};
