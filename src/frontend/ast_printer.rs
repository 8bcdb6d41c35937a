use crate::frontend::ast::*;
use std::io::{self, Write};

/// Dumps a syntax tree as an indented outline, one node per line.
pub struct AstPrinter<W: Write> {
    writer: W,
    indent: usize,
}

impl<W: Write> AstPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, indent: 0 }
    }

    /// Prints the given node and everything below it.
    pub fn print(&mut self, node: &Node) -> io::Result<()> {
        self.print_indent()?;
        match node {
            Node::ArrayAccess(access) => {
                writeln!(self.writer, "ArrayAccess {}", access.identifier.value)?;
                self.indent += 2;
                self.print_labeled("Index:", &access.index)?;
                self.indent -= 2;
            }
            Node::Assignment(assignment) => {
                writeln!(self.writer, "Assignment {}", assignment.operator.value)?;
                self.indent += 2;
                self.print_labeled("Left value:", &assignment.lvalue)?;
                self.print_labeled("Right value:", &assignment.rvalue)?;
                self.indent -= 2;
            }
            Node::BinaryOp(op) => {
                writeln!(self.writer, "BinaryOp {}", op.operator.value)?;
                self.indent += 2;
                self.print(&op.left)?;
                self.print(&op.right)?;
                self.indent -= 2;
            }
            Node::Call(call) => self.print_call(call)?,
            Node::Condition(condition) => self.print_condition(condition)?,
            Node::ExpressionList(list) => {
                writeln!(self.writer, "ExpressionList")?;
                self.print_expressions(list)?;
            }
            Node::Identifier(identifier) => {
                writeln!(self.writer, "Identifier {}", identifier.identifier.value)?;
            }
            Node::Literal(literal) => {
                writeln!(
                    self.writer,
                    "Literal {} ({})",
                    literal.value.value, literal.value.kind
                )?;
            }
            Node::Not(not) => {
                writeln!(self.writer, "Not")?;
                self.indent += 2;
                self.print(&not.expression)?;
                self.indent -= 2;
            }
            Node::ScopeAccess(access) => {
                writeln!(
                    self.writer,
                    "ScopeAccess {}.{}",
                    access.identifier.value, access.inner.value
                )?;
            }
            Node::StatementList(list) => {
                writeln!(self.writer, "StatementList")?;
                self.print_statements(list)?;
            }
        }
        Ok(())
    }

    fn print_call(&mut self, call: &Call) -> io::Result<()> {
        writeln!(self.writer, "Call {}", call.identifier.value)?;
        self.indent += 2;
        self.print_indent()?;
        writeln!(self.writer, "Arguments:")?;
        self.print_expressions(&call.arguments)?;
        if let Some(block) = &call.block {
            self.print_indent()?;
            writeln!(self.writer, "Block:")?;
            self.print_statements(block)?;
        }
        self.indent -= 2;
        Ok(())
    }

    fn print_condition(&mut self, condition: &Condition) -> io::Result<()> {
        writeln!(self.writer, "Condition")?;
        self.indent += 2;
        self.print_labeled("If:", &condition.condition)?;
        self.print_indent()?;
        writeln!(self.writer, "Then:")?;
        self.print_statements(&condition.block)?;
        match &condition.else_branch {
            Some(ElseBranch::Condition(nested)) => {
                self.print_indent()?;
                writeln!(self.writer, "Else:")?;
                self.indent += 2;
                self.print_indent()?;
                self.print_condition(nested)?;
                self.indent -= 2;
            }
            Some(ElseBranch::Block(block)) => {
                self.print_indent()?;
                writeln!(self.writer, "Else:")?;
                self.print_statements(block)?;
            }
            None => {}
        }
        self.indent -= 2;
        Ok(())
    }

    fn print_labeled(&mut self, label: &str, node: &Node) -> io::Result<()> {
        self.print_indent()?;
        writeln!(self.writer, "{}", label)?;
        self.indent += 2;
        self.print(node)?;
        self.indent -= 2;
        Ok(())
    }

    fn print_statements(&mut self, list: &StatementList) -> io::Result<()> {
        self.indent += 2;
        for statement in &list.statements {
            self.print(statement)?;
        }
        self.indent -= 2;
        Ok(())
    }

    fn print_expressions(&mut self, list: &ExpressionList) -> io::Result<()> {
        self.indent += 2;
        for expr in &list.expressions {
            self.print(expr)?;
        }
        self.indent -= 2;
        Ok(())
    }

    fn print_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.indent {
            write!(self.writer, " ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::parse;
    use std::path::Path;
    use std::sync::Arc;

    fn dump(input: &str) -> String {
        let tree = parse(Arc::from(Path::new("t.shi")), input).unwrap();
        let mut out = Vec::new();
        AstPrinter::new(&mut out).print(&tree).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn assignment_outline() {
        assert_eq!(
            dump("configs += [\"a\", b.c]"),
            "StatementList\n\
             \x20 Assignment +=\n\
             \x20   Left value:\n\
             \x20     Identifier configs\n\
             \x20   Right value:\n\
             \x20     ExpressionList\n\
             \x20       Literal \"a\" (string literal)\n\
             \x20       ScopeAccess b.c\n"
        );
    }

    #[test]
    fn condition_outline() {
        assert_eq!(
            dump("if (!a) { f() {} } else if (b) {} else { x = y[1] }"),
            "StatementList\n\
             \x20 Condition\n\
             \x20   If:\n\
             \x20     Not\n\
             \x20       Identifier a\n\
             \x20   Then:\n\
             \x20     Call f\n\
             \x20       Arguments:\n\
             \x20       Block:\n\
             \x20   Else:\n\
             \x20     Condition\n\
             \x20       If:\n\
             \x20         Identifier b\n\
             \x20       Then:\n\
             \x20       Else:\n\
             \x20         Assignment =\n\
             \x20           Left value:\n\
             \x20             Identifier x\n\
             \x20           Right value:\n\
             \x20             ArrayAccess y\n\
             \x20               Index:\n\
             \x20                 Literal 1 (integer literal)\n"
        );
    }
}
