use crate::frontend::ast::*;
use std::fmt::{self, Write};

/// Formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Spaces per nesting level.
    pub indentation: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { indentation: 2 }
    }
}

/// Renders a syntax tree back into canonical source text.
///
/// Parsing the output again yields a tree [equivalent](Node::equivalent) to the input.
/// Comments are not part of the tree and are therefore lost.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Statement lists and statements are written one per line, anything else as an expression.
    ///
    /// Trees from the parser always render completely. A hand-built tree that nests a statement
    /// inside an expression renders up to that statement only, and a warning is logged.
    pub fn write(&self, node: &Node) -> String {
        let mut output = String::new();
        let _ = match node {
            Node::StatementList(list) => self.write_statement_list(&mut output, list, 0),
            statement if statement.is_statement() => {
                self.write_statement(&mut output, statement, 0)
            }
            expr => self.write_expr(&mut output, expr),
        };
        output
    }

    fn indent(&self, output: &mut String, nesting: usize) -> fmt::Result {
        write!(output, "{:width$}", "", width = nesting * self.config.indentation)
    }

    fn write_statement_list(
        &self,
        output: &mut String,
        list: &StatementList,
        nesting: usize,
    ) -> fmt::Result {
        for statement in &list.statements {
            self.write_statement(output, statement, nesting)?;
        }
        Ok(())
    }

    fn write_statement(&self, output: &mut String, node: &Node, nesting: usize) -> fmt::Result {
        self.indent(output, nesting)?;
        match node {
            Node::Assignment(assignment) => {
                self.write_expr(output, &assignment.lvalue)?;
                write!(output, " {} ", assignment.operator.value)?;
                self.write_expr(output, &assignment.rvalue)?;
            }
            Node::Call(call) => {
                self.write_call(output, call)?;
                if let Some(block) = &call.block {
                    output.push(' ');
                    self.write_block(output, block, nesting)?;
                }
            }
            Node::Condition(condition) => self.write_condition(output, condition, nesting)?,
            // Only reachable for trees built by hand.
            Node::StatementList(list) => {
                self.write_block(output, list, nesting)?;
            }
            expr => self.write_expr(output, expr)?,
        }
        writeln!(output)
    }

    /// Writes `{`, the statements one level deeper and `}` without a trailing newline.
    fn write_block(&self, output: &mut String, block: &StatementList, nesting: usize) -> fmt::Result {
        writeln!(output, "{{")?;
        self.write_statement_list(output, block, nesting + 1)?;
        self.indent(output, nesting)?;
        write!(output, "}}")
    }

    fn write_condition(
        &self,
        output: &mut String,
        condition: &Condition,
        nesting: usize,
    ) -> fmt::Result {
        write!(output, "if (")?;
        self.write_expr(output, &condition.condition)?;
        write!(output, ") ")?;
        self.write_block(output, &condition.block, nesting)?;
        match &condition.else_branch {
            Some(ElseBranch::Condition(nested)) => {
                write!(output, " else ")?;
                self.write_condition(output, nested, nesting)
            }
            Some(ElseBranch::Block(block)) => {
                write!(output, " else ")?;
                self.write_block(output, block, nesting)
            }
            None => Ok(()),
        }
    }

    fn write_call(&self, output: &mut String, call: &Call) -> fmt::Result {
        write!(output, "{}(", call.identifier.value)?;
        self.write_expr_list(output, &call.arguments)?;
        write!(output, ")")
    }

    fn write_expr_list(&self, output: &mut String, list: &ExpressionList) -> fmt::Result {
        for (i, expr) in list.expressions.iter().enumerate() {
            if i > 0 {
                write!(output, ", ")?;
            }
            self.write_expr(output, expr)?;
        }
        Ok(())
    }

    fn write_expr(&self, output: &mut String, node: &Node) -> fmt::Result {
        match node {
            Node::ArrayAccess(access) => {
                write!(output, "{}[", access.identifier.value)?;
                self.write_expr(output, &access.index)?;
                write!(output, "]")
            }
            Node::BinaryOp(op) => {
                let precedence = op.operator.precedence();
                let left_parens = match &*op.left {
                    Node::BinaryOp(left) => left.operator.precedence() < precedence,
                    Node::Not(_) => true,
                    _ => false,
                };
                let right_parens = match &*op.right {
                    Node::BinaryOp(right) => right.operator.precedence() <= precedence,
                    _ => false,
                };
                self.write_operand(output, &op.left, left_parens)?;
                write!(output, " {} ", op.operator.value)?;
                self.write_operand(output, &op.right, right_parens)
            }
            Node::Call(call) => self.write_call(output, call),
            Node::ExpressionList(list) => {
                write!(output, "[")?;
                self.write_expr_list(output, list)?;
                write!(output, "]")
            }
            Node::Identifier(identifier) => write!(output, "{}", identifier.identifier.value),
            Node::Literal(literal) => write!(output, "{}", literal.value.value),
            Node::Not(not) => {
                write!(output, "!")?;
                let parens = matches!(&*not.expression, Node::BinaryOp(_));
                self.write_operand(output, &not.expression, parens)
            }
            Node::ScopeAccess(access) => {
                write!(output, "{}.{}", access.identifier.value, access.inner.value)
            }
            Node::Assignment(_) | Node::Condition(_) | Node::StatementList(_) => {
                log::warn!("{} cannot appear inside an expression", node.name());
                Err(fmt::Error)
            }
        }
    }

    fn write_operand(&self, output: &mut String, node: &Node, parens: bool) -> fmt::Result {
        if parens {
            write!(output, "(")?;
            self.write_expr(output, node)?;
            write!(output, ")")
        } else {
            self.write_expr(output, node)
        }
    }
}
