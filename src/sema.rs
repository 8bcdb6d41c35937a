//! Hand-off point between the parser and semantic analysis.

use crate::frontend::ast::Node;
use crate::frontend::error::SemanticError;

/// Turns a parsed file into build targets.
///
/// Implementations receive the [`Node::StatementList`] returned by
/// [`parse`](crate::frontend::parser::parse) and take ownership of it.
pub trait Sema {
    type Target;

    fn process(&mut self, root: Node) -> Result<Vec<Self::Target>, SemanticError>;
}
