//! Front end for the shi build description language: lexer, parser, syntax tree, formatter and
//! diagnostics.

pub mod frontend;
pub mod sema;
