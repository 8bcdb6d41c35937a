pub mod ast;
pub mod ast_printer;
pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod source;
pub mod token;
pub mod writer;
