//! Recursive-descent parser for shi files.
//!
//! ```text
//! File          = StatementList .
//! StatementList = { Statement } .
//! Statement     = Condition | Assignment | Call .
//! Assignment    = identifier AssignOp Expression .
//! Call          = identifier "(" [ ExpressionList ] ")" [ Block ] .
//! Condition     = "if" "(" Expression ")" Block [ "else" ( Condition | Block ) ] .
//! Block         = "{" StatementList "}" .
//! LValue        = identifier | ArrayAccess | ScopeAccess .
//! ArrayAccess   = identifier "[" Expression "]" .
//! ScopeAccess   = identifier "." identifier .
//! ExpressionList= Expression { "," Expression } [ "," ] .
//! Expression    = UnaryExpr | Expression BinaryOp Expression .
//! UnaryExpr     = PrimaryExpr | "!" UnaryExpr .
//! PrimaryExpr   = LValue | Call | integer | string | "true" | "false"
//!               | "(" Expression ")" | "[" [ ExpressionList ] "]" .
//! ```
//!
//! Binary operators are left-associative and bind according to [`TokenKind::precedence`].
//! Array and scope accesses are lvalues inside expressions only; a statement is chosen by the
//! token after its leading identifier.

use crate::frontend::ast::{
    ArrayAccess, Assignment, BinaryOp, Call, Condition, ElseBranch, ExpressionList, Identifier,
    Literal, Node, Not, ScopeAccess, StatementList,
};
use crate::frontend::error::{ParseError, SemanticError, SyntaxError};
use crate::frontend::lexer::tokenize;
use crate::frontend::location::Location;
use crate::frontend::token::{Token, TokenKind};
use std::path::Path;
use std::sync::Arc;

/// Second tokens that make an identifier the start of a statement.
const STATEMENT_CONTINUATIONS: [TokenKind; 4] = [
    TokenKind::LeftParen,
    TokenKind::Equal,
    TokenKind::PlusEquals,
    TokenKind::MinusEquals,
];

const STATEMENT_STARTS: [TokenKind; 2] = [TokenKind::If, TokenKind::Identifier];

/// Deepest nesting of expressions and blocks accepted before giving up.
pub const MAX_NESTING: usize = 128;

/// Lexes and parses a whole file.
pub fn parse(path: Arc<Path>, contents: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(path, contents)?;
    Parser::new(tokens).parse()
}

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
    end_location: Location,
}

impl Parser {
    /// Comments are dropped and the end-of-input sentinel, if any, marks the end of the window.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut end_location = tokens
            .last()
            .map(|token| token.location.clone())
            .unwrap_or_default();
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| match token.kind {
                TokenKind::Comment => false,
                TokenKind::Invalid => {
                    end_location = token.location.clone();
                    false
                }
                _ => true,
            })
            .collect();
        Parser {
            tokens,
            current: 0,
            depth: 0,
            end_location,
        }
    }

    /// Parses the whole token stream into a [`Node::StatementList`].
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let list = self.parse_statement_list()?;
        if let Some(token) = self.peek(0) {
            return Err(SyntaxError::UnexpectedToken {
                token: token.clone(),
                expected: STATEMENT_STARTS.to_vec(),
            }
            .into());
        }
        log::debug!(
            "{}: parsed {} top-level statements",
            self.end_location,
            list.statements.len()
        );
        Ok(Node::StatementList(list))
    }

    fn peek(&self, lookahead: usize) -> Option<&Token> {
        self.tokens.get(self.current + lookahead)
    }

    fn next_is(&self, kind: TokenKind, lookahead: usize) -> bool {
        self.peek(lookahead).is_some_and(|token| token.kind == kind)
    }

    fn next_in(&self, kinds: &[TokenKind]) -> bool {
        self.peek(0).is_some_and(|token| kinds.contains(&token.kind))
    }

    fn expect(&self, kinds: &[TokenKind], lookahead: usize) -> Result<&Token, SyntaxError> {
        match self.peek(lookahead) {
            None => Err(SyntaxError::UnexpectedEndOfTokens {
                expected: kinds.to_vec(),
                location: self.end_location.clone(),
            }),
            Some(token) if kinds.contains(&token.kind) => Ok(token),
            Some(token) => Err(SyntaxError::UnexpectedToken {
                token: token.clone(),
                expected: kinds.to_vec(),
            }),
        }
    }

    fn consume(&mut self, kinds: &[TokenKind]) -> Result<Token, SyntaxError> {
        let token = self.expect(kinds, 0)?.clone();
        self.current += 1;
        Ok(token)
    }

    /// Location reported when an expression is missing.
    fn current_location(&self) -> Location {
        self.peek(0)
            .map(|token| token.location.clone())
            .unwrap_or_else(|| self.end_location.clone())
    }

    fn enter(&mut self) -> Result<(), SyntaxError> {
        if self.depth == MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING,
                location: self.current_location(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_statement_list(&mut self) -> Result<StatementList, ParseError> {
        let mut statements = Vec::new();
        while let Some(statement) = self.parse_statement()? {
            statements.push(statement);
        }
        Ok(StatementList { statements })
    }

    /// Returns `None` if the next token cannot start a statement.
    fn parse_statement(&mut self) -> Result<Option<Node>, ParseError> {
        if self.next_is(TokenKind::If, 0) {
            log::trace!("statement at {}: condition", self.current_location());
            return Ok(Some(Node::Condition(self.parse_condition()?)));
        }
        if self.next_is(TokenKind::Identifier, 0) {
            let continuation = self.expect(&STATEMENT_CONTINUATIONS, 1)?.kind;
            log::trace!(
                "statement at {}: {}",
                self.current_location(),
                continuation.describe()
            );
            let statement = match continuation {
                TokenKind::LeftParen => Node::Call(self.parse_call(true)?),
                _ => Node::Assignment(self.parse_assignment()?),
            };
            return Ok(Some(statement));
        }
        Ok(None)
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let lvalue = self.parse_lvalue()?;
        let operator = self.consume(&TokenKind::ASSIGNMENT_OPS)?;
        let rvalue = self.require_expression(0, "missing right-hand side of assignment")?;
        Ok(Assignment {
            operator,
            lvalue: Box::new(lvalue),
            rvalue: Box::new(rvalue),
        })
    }

    fn parse_block(&mut self) -> Result<StatementList, ParseError> {
        self.enter()?;
        self.consume(&[TokenKind::LeftBrace])?;
        let list = self.parse_statement_list()?;
        self.consume(&[TokenKind::RightBrace])?;
        self.leave();
        Ok(list)
    }

    fn parse_call(&mut self, expect_block: bool) -> Result<Call, ParseError> {
        let identifier = self.consume(&[TokenKind::Identifier])?;
        self.consume(&[TokenKind::LeftParen])?;
        let arguments = if self.next_is(TokenKind::RightParen, 0) {
            ExpressionList::default()
        } else {
            self.parse_expression_list()?
        };
        self.consume(&[TokenKind::RightParen])?;

        let block = if expect_block && self.next_is(TokenKind::LeftBrace, 0) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Call {
            identifier,
            arguments,
            block,
        })
    }

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        self.consume(&[TokenKind::If])?;
        self.consume(&[TokenKind::LeftParen])?;
        let condition = self.require_expression(0, "missing condition")?;
        self.consume(&[TokenKind::RightParen])?;
        let block = self.parse_block()?;

        let mut else_branch = None;
        if self.next_is(TokenKind::Else, 0) {
            self.consume(&[TokenKind::Else])?;
            else_branch = Some(if self.next_is(TokenKind::If, 0) {
                ElseBranch::Condition(Box::new(self.parse_condition()?))
            } else {
                ElseBranch::Block(self.parse_block()?)
            });
        }
        Ok(Condition {
            condition: Box::new(condition),
            block,
            else_branch,
        })
    }

    /// Precedence climbing: folds binary operators binding tighter than `min_precedence`.
    /// Returns `None` if the next token cannot start an expression.
    fn parse_expression(&mut self, min_precedence: u8) -> Result<Option<Node>, ParseError> {
        self.enter()?;
        let expr = self.parse_nested_expression(min_precedence)?;
        self.leave();
        Ok(expr)
    }

    fn parse_nested_expression(&mut self, min_precedence: u8) -> Result<Option<Node>, ParseError> {
        let Some(kind) = self.peek(0).map(|token| token.kind) else {
            return Ok(None);
        };
        let mut left = match kind {
            TokenKind::Identifier => {
                if self.next_is(TokenKind::LeftParen, 1) {
                    Node::Call(self.parse_call(false)?)
                } else {
                    self.parse_lvalue()?
                }
            }
            TokenKind::LeftParen => {
                self.consume(&[TokenKind::LeftParen])?;
                let expr = self.require_expression(0, "missing expression in parentheses")?;
                self.consume(&[TokenKind::RightParen])?;
                expr
            }
            TokenKind::LeftBracket => {
                self.consume(&[TokenKind::LeftBracket])?;
                let list = if self.next_is(TokenKind::RightBracket, 0) {
                    ExpressionList::default()
                } else {
                    self.parse_expression_list()?
                };
                self.consume(&[TokenKind::RightBracket])?;
                Node::ExpressionList(list)
            }
            TokenKind::Bang => {
                let not = self.consume(&[TokenKind::Bang])?;
                debug_assert!(min_precedence <= not.precedence());
                let expr = self.require_expression(not.precedence(), "missing operand of \"!\"")?;
                return Ok(Some(Node::Not(Not {
                    expression: Box::new(expr),
                })));
            }
            kind if TokenKind::LITERALS.contains(&kind) => Node::Literal(Literal {
                value: self.consume(&TokenKind::LITERALS)?,
            }),
            _ => return Ok(None),
        };

        loop {
            let Some(kind) = self.peek(0).map(|token| token.kind) else {
                break;
            };
            let Some(precedence) = kind.binary_precedence() else {
                break;
            };
            if precedence <= min_precedence {
                break;
            }
            let operator = self.consume(&[kind])?;
            let right = self.require_expression(precedence, "missing right operand")?;
            left = Node::BinaryOp(BinaryOp {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(Some(left))
    }

    fn require_expression(
        &mut self,
        min_precedence: u8,
        message: &str,
    ) -> Result<Node, ParseError> {
        let location = self.current_location();
        match self.parse_expression(min_precedence)? {
            Some(expr) => Ok(expr),
            None => Err(SemanticError::new(location, message).into()),
        }
    }

    /// A trailing comma is allowed.
    fn parse_expression_list(&mut self) -> Result<ExpressionList, ParseError> {
        let mut expressions = vec![self.require_expression(0, "missing expression")?];
        while self.next_is(TokenKind::Comma, 0) {
            self.consume(&[TokenKind::Comma])?;
            match self.parse_expression(0)? {
                Some(expr) => expressions.push(expr),
                None => break,
            }
        }
        Ok(ExpressionList { expressions })
    }

    fn parse_lvalue(&mut self) -> Result<Node, ParseError> {
        let identifier = self.consume(&[TokenKind::Identifier])?;

        if self.next_is(TokenKind::LeftBracket, 0) {
            self.consume(&[TokenKind::LeftBracket])?;
            let index = self.require_expression(0, "missing array index")?;
            self.consume(&[TokenKind::RightBracket])?;
            return Ok(Node::ArrayAccess(ArrayAccess {
                identifier,
                index: Box::new(index),
            }));
        }

        if self.next_in(&[TokenKind::Dot]) {
            self.consume(&[TokenKind::Dot])?;
            let inner = self.consume(&[TokenKind::Identifier])?;
            return Ok(Node::ScopeAccess(ScopeAccess { identifier, inner }));
        }

        Ok(Node::Identifier(Identifier { identifier }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse_str(input: &str) -> Result<Node, ParseError> {
        parse(Arc::from(Path::new("/fake/path/file.shi")), input)
    }

    fn statements(input: &str) -> Vec<Node> {
        match parse_str(input).unwrap() {
            Node::StatementList(list) => list.statements,
            node => panic!("unexpected root {}", node.name()),
        }
    }

    fn single_rvalue(input: &str) -> Node {
        let mut statements = statements(input);
        assert_eq!(statements.len(), 1);
        match statements.remove(0) {
            Node::Assignment(assignment) => *assignment.rvalue,
            node => panic!("expected an assignment, got {}", node.name()),
        }
    }

    fn assert_identifier(node: &Node, name: &str) {
        assert_matches!(node, Node::Identifier(Identifier { identifier }) => {
            assert_eq!(identifier.kind, TokenKind::Identifier);
            assert_eq!(identifier.value, name);
        });
    }

    fn assert_literal(node: &Node, kind: TokenKind, text: &str) {
        assert_matches!(node, Node::Literal(Literal { value }) => {
            assert_eq!(value.kind, kind);
            assert_eq!(value.value, text);
        });
    }

    #[test]
    fn empty_input() {
        assert_eq!(statements(""), vec![]);
        assert_eq!(statements("# only a comment\n"), vec![]);
    }

    #[test]
    fn assignment_of_empty_list() {
        let statements = statements("configs = []");
        assert_eq!(statements.len(), 1);
        assert_matches!(&statements[0], Node::Assignment(assignment) => {
            assert_identifier(&assignment.lvalue, "configs");
            assert_eq!(assignment.operator.kind, TokenKind::Equal);
            assert_matches!(&*assignment.rvalue, Node::ExpressionList(list) => {
                assert!(list.expressions.is_empty());
            });
        });
    }

    #[test]
    fn assignment_without_left_value() {
        let err = parse_str("= b").unwrap_err();
        assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedToken { token, expected }) => {
            assert_eq!(token.kind, TokenKind::Equal);
            assert_eq!(expected, STATEMENT_STARTS.to_vec());
        });
    }

    #[test]
    fn assignment_without_right_value() {
        let err = parse_str("a = ").unwrap_err();
        assert_matches!(err, ParseError::Semantic(SemanticError { location, .. }) => {
            assert_eq!((location.line(), location.column()), (1, 5));
        });
    }

    #[test]
    fn precedence_of_and_over_equality() {
        let rvalue = single_rvalue("a = true && b == \"x\"");
        assert_matches!(&rvalue, Node::BinaryOp(and) => {
            assert_eq!(and.operator.kind, TokenKind::And);
            assert_literal(&and.left, TokenKind::True, "true");
            assert_matches!(&*and.right, Node::BinaryOp(eq) => {
                assert_eq!(eq.operator.kind, TokenKind::EqualEqual);
                assert_identifier(&eq.left, "b");
                assert_literal(&eq.right, TokenKind::String, "\"x\"");
            });
        });
    }

    #[test]
    fn binary_operators_are_left_associative() {
        let rvalue = single_rvalue("a = 1 - 2 + 3");
        assert_matches!(&rvalue, Node::BinaryOp(plus) => {
            assert_eq!(plus.operator.kind, TokenKind::Plus);
            assert_literal(&plus.right, TokenKind::Integer, "3");
            assert_matches!(&*plus.left, Node::BinaryOp(minus) => {
                assert_eq!(minus.operator.kind, TokenKind::Minus);
                assert_literal(&minus.left, TokenKind::Integer, "1");
                assert_literal(&minus.right, TokenKind::Integer, "2");
            });
        });
    }

    #[test]
    fn full_precedence_ladder() {
        // a || b && c == d < e + f
        let rvalue = single_rvalue("x = a || b && c == d < e + f");
        let Node::BinaryOp(or) = &rvalue else { panic!() };
        assert_eq!(or.operator.kind, TokenKind::Or);
        let Node::BinaryOp(and) = &*or.right else { panic!() };
        assert_eq!(and.operator.kind, TokenKind::And);
        let Node::BinaryOp(eq) = &*and.right else { panic!() };
        assert_eq!(eq.operator.kind, TokenKind::EqualEqual);
        let Node::BinaryOp(less) = &*eq.right else { panic!() };
        assert_eq!(less.operator.kind, TokenKind::Less);
        let Node::BinaryOp(plus) = &*less.right else { panic!() };
        assert_eq!(plus.operator.kind, TokenKind::Plus);
        assert_identifier(&plus.right, "f");
    }

    #[test]
    fn not_binds_to_its_operand_only() {
        let rvalue = single_rvalue("headers -= \"test.h\" + !public_headers");
        assert_matches!(&rvalue, Node::BinaryOp(plus) => {
            assert_eq!(plus.operator.kind, TokenKind::Plus);
            assert_literal(&plus.left, TokenKind::String, "\"test.h\"");
            assert_matches!(&*plus.right, Node::Not(not) => {
                assert_identifier(&not.expression, "public_headers");
            });
        });
        assert_matches!(single_rvalue("a = !!b"), Node::Not(Not { expression }) => {
            assert_matches!(*expression, Node::Not(_));
        });
    }

    #[test]
    fn not_does_not_continue_into_binary_operators() {
        assert_matches!(
            parse_str("a = !b && c"),
            Err(ParseError::Syntax(SyntaxError::UnexpectedToken { token, .. })) => {
                assert_eq!(token.kind, TokenKind::And);
            }
        );
        assert_matches!(single_rvalue("a = (!b) && c"), Node::BinaryOp(and) => {
            assert_matches!(*and.left, Node::Not(_));
        });
    }

    #[test]
    fn parentheses_group() {
        let rvalue = single_rvalue("testing = true && ( os == \"win\")");
        assert_matches!(&rvalue, Node::BinaryOp(and) => {
            assert_eq!(and.operator.kind, TokenKind::And);
            assert_matches!(&*and.right, Node::BinaryOp(eq) => {
                assert_identifier(&eq.left, "os");
            });
        });
        let rvalue = single_rvalue("a = (1 + 2) - 3");
        assert_matches!(rvalue, Node::BinaryOp(minus) => {
            assert_matches!(*minus.left, Node::BinaryOp(_));
        });
    }

    #[test]
    fn lvalues() {
        assert_matches!(single_rvalue("a = b[0]"), Node::ArrayAccess(access) => {
            assert_eq!(access.identifier.value, "b");
            assert_literal(&access.index, TokenKind::Integer, "0");
        });
        assert_matches!(single_rvalue("a += b.c"), Node::ScopeAccess(access) => {
            assert_eq!(access.identifier.value, "b");
            assert_eq!(access.inner.value, "c");
        });
        assert_matches!(single_rvalue("a -= f[g + 1] + h.i"), Node::BinaryOp(plus) => {
            assert_matches!(&*plus.left, Node::ArrayAccess(access) => {
                assert_matches!(&*access.index, Node::BinaryOp(_));
            });
            assert_matches!(&*plus.right, Node::ScopeAccess(_));
        });
    }

    #[test]
    fn call_with_arguments_and_block() {
        let statements = statements("executable(\"sample\", 123) {\n  deps = [ \"library\" ]\n}\n");
        assert_matches!(&statements[0], Node::Call(call) => {
            assert_eq!(call.identifier.value, "executable");
            assert_eq!(call.arguments.expressions.len(), 2);
            assert_literal(&call.arguments.expressions[0], TokenKind::String, "\"sample\"");
            assert_literal(&call.arguments.expressions[1], TokenKind::Integer, "123");
            let block = call.block.as_ref().unwrap();
            assert_eq!(block.statements.len(), 1);
            assert!(block.statements[0].as_assignment().is_some());
        });
    }

    #[test]
    fn call_in_expression_takes_no_block() {
        let err = parse_str("a = f() { b = 1 }").unwrap_err();
        assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedToken { token, .. }) => {
            assert_eq!(token.kind, TokenKind::LeftBrace);
        });
        assert_matches!(single_rvalue("configs += generate_smth()"), Node::Call(call) => {
            assert!(call.arguments.expressions.is_empty());
            assert!(call.block.is_none());
        });
    }

    #[test]
    fn trailing_comma_in_lists() {
        assert_matches!(single_rvalue("sources = [ \"source1\", \"source2\", ]"), Node::ExpressionList(list) => {
            assert_eq!(list.expressions.len(), 2);
        });
    }

    #[test]
    fn condition_chain() {
        let input = "if (os == \"macos\") {\n  a = 1\n} else if (os != \"linux\") {\n  b = 2\n} else {\n  c = 3\n}";
        let statements = statements(input);
        assert_eq!(statements.len(), 1);
        let condition = statements[0].as_condition().unwrap();
        assert_matches!(&*condition.condition, Node::BinaryOp(op) => {
            assert_eq!(op.operator.kind, TokenKind::EqualEqual);
        });
        assert_eq!(condition.block.statements.len(), 1);
        assert_matches!(&condition.else_branch, Some(ElseBranch::Condition(nested)) => {
            assert_matches!(&*nested.condition, Node::BinaryOp(op) => {
                assert_eq!(op.operator.kind, TokenKind::NotEqual);
            });
            assert_matches!(&nested.else_branch, Some(ElseBranch::Block(block)) => {
                assert_eq!(block.statements.len(), 1);
            });
        });
    }

    #[test]
    fn bad_statement_continuation() {
        let err = parse_str("a b").unwrap_err();
        assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedToken { token, expected }) => {
            assert_eq!(token.value, "b");
            assert_eq!(
                expected,
                vec![
                    TokenKind::LeftParen,
                    TokenKind::Equal,
                    TokenKind::PlusEquals,
                    TokenKind::MinusEquals,
                ]
            );
        });
        for input in ["a[0] = 1", "b.c += d"] {
            let err = parse_str(input).unwrap_err();
            assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedToken { token, expected }) => {
                assert_eq!(token.location.column(), 2);
                assert_eq!(expected, STATEMENT_CONTINUATIONS.to_vec());
            });
        }
        let err = parse_str("a").unwrap_err();
        assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedEndOfTokens { expected, .. }) => {
            assert_eq!(expected, STATEMENT_CONTINUATIONS.to_vec());
        });
    }

    #[test]
    fn unclosed_block_reports_end_of_tokens() {
        let err = parse_str("if (a) {\n  b = 1\n").unwrap_err();
        assert_matches!(err, ParseError::Syntax(SyntaxError::UnexpectedEndOfTokens { expected, location }) => {
            assert_eq!(expected, vec![TokenKind::RightBrace]);
            assert_eq!((location.line(), location.column()), (3, 1));
        });
    }

    #[test]
    fn missing_condition() {
        assert_matches!(parse_str("if () {}"), Err(ParseError::Semantic(_)));
        assert_matches!(parse_str("a = 1 +"), Err(ParseError::Semantic(_)));
        assert_matches!(parse_str("a = [1, 2"), Err(ParseError::Syntax(_)));
    }

    fn assert_too_deep(input: &str) {
        assert_matches!(
            parse_str(input),
            Err(ParseError::Syntax(SyntaxError::NestingTooDeep { limit: MAX_NESTING, .. }))
        );
    }

    #[test]
    fn deep_nesting_is_an_error() {
        assert_too_deep(&format!("a = {}", "(".repeat(10_000)));
        assert_too_deep(&format!("a = {}b", "!".repeat(10_000)));
        assert_too_deep(&format!("a = {}", "[".repeat(10_000)));
        assert_too_deep(&format!("a = {}", "f(".repeat(10_000)));
        assert_too_deep(&"if (a) {".repeat(10_000));

        let err = parse_str(&format!("a = {}", "(".repeat(10_000))).unwrap_err();
        assert_eq!(err.location().column() as usize, 5 + MAX_NESTING);
    }

    #[test]
    fn nesting_below_the_limit() {
        let depth = MAX_NESTING / 2;
        let input = format!("a = {}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_matches!(single_rvalue(&input), Node::Literal(_));
        let input = format!("{}{}", "if (a) {".repeat(depth), "}".repeat(depth));
        assert_eq!(statements(&input).len(), 1);
    }

    #[test]
    fn lexical_errors_pass_through() {
        assert_matches!(
            parse_str("a = \"open"),
            Err(ParseError::Syntax(SyntaxError::UnexpectedSymbol { .. }))
        );
    }

    #[test]
    fn tree_outlives_tokens() {
        let path: Arc<Path> = Arc::from(Path::new("t.shi"));
        let tokens = tokenize(path, "name = \"x\"").unwrap();
        let tree = Parser::new(tokens).parse().unwrap();
        assert!(tree.as_statement_list().is_some());
    }
}
