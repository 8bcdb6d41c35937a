use crate::frontend::cursor::Cursor;
use crate::frontend::error::SyntaxError;
use crate::frontend::location::Location;
use crate::frontend::token::{Token, TokenKind};
use std::path::Path;
use std::sync::Arc;

/// Splits `contents` into tokens, ending with a single end-of-input sentinel.
pub fn tokenize(path: Arc<Path>, contents: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(path, contents).tokenize()
}

#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    path: Arc<Path>,
    src: &'src str,
    cursor: Cursor<'src>,
    start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(path: Arc<Path>, src: &'src str) -> Lexer<'src> {
        Lexer {
            path,
            src,
            cursor: Cursor::new(src),
            start: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_end_of_input();
            tokens.push(token);
            if done {
                break;
            }
        }
        log::trace!("{}: {} tokens", self.path.display(), tokens.len());
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();
        self.start = self.cursor.offset();
        let location = self.current_location();
        if self.cursor.is_eof() {
            return Ok(Token::end_of_input(location));
        }

        if let Some(kind) = self.one_symbol_token() {
            self.cursor.advance();
            return Ok(self.create_token(kind, location));
        }
        if let Some(kind) = self.one_or_two_symbols_token() {
            if self.cursor.peek2() == '=' {
                self.cursor.advance_by(2);
                let kind = match kind {
                    TokenKind::Plus => TokenKind::PlusEquals,
                    TokenKind::Minus => TokenKind::MinusEquals,
                    TokenKind::Bang => TokenKind::NotEqual,
                    TokenKind::Equal => TokenKind::EqualEqual,
                    TokenKind::Less => TokenKind::LessEqual,
                    TokenKind::Greater => TokenKind::GreaterEqual,
                    _ => unreachable!(),
                };
                return Ok(self.create_token(kind, location));
            }
            self.cursor.advance();
            return Ok(self.create_token(kind, location));
        }
        if let Some(kind) = self.two_symbols_token() {
            self.cursor.advance_by(2);
            return Ok(self.create_token(kind, location));
        }

        let token = match self.cursor.peek() {
            c if c.is_ascii_digit() => self.consume_integer(location),
            '"' => self.consume_string(location)?,
            c if c.is_ascii_alphabetic() || c == '_' => self.consume_identifier_or_keyword(location),
            '#' => self.consume_comment(location),
            symbol => {
                return Err(SyntaxError::UnexpectedSymbol {
                    symbol,
                    location,
                    expected: vec![],
                });
            }
        };
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.peek() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                }
                '\n' => self.cursor.new_line(),
                _ => break,
            }
        }
    }

    fn one_symbol_token(&self) -> Option<TokenKind> {
        let kind = match self.cursor.peek() {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        Some(kind)
    }

    fn one_or_two_symbols_token(&self) -> Option<TokenKind> {
        let kind = match self.cursor.peek() {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '!' => TokenKind::Bang,
            '=' => TokenKind::Equal,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            _ => return None,
        };
        Some(kind)
    }

    fn two_symbols_token(&self) -> Option<TokenKind> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            ('&', '&') => Some(TokenKind::And),
            ('|', '|') => Some(TokenKind::Or),
            _ => None,
        }
    }

    fn current_location(&self) -> Location {
        Location::new(self.path.clone(), self.cursor.line(), self.cursor.column())
    }

    fn current_lexeme(&self) -> &'src str {
        &self.src[self.start..self.cursor.offset()]
    }

    fn create_token(&self, kind: TokenKind, location: Location) -> Token {
        Token::new(kind, self.current_lexeme(), location)
    }

    fn consume_integer(&mut self, location: Location) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        self.create_token(TokenKind::Integer, location)
    }

    fn consume_string(&mut self, location: Location) -> Result<Token, SyntaxError> {
        // Opening quote
        self.cursor.advance();
        self.cursor.advance_while(|c| c != '"');
        if self.cursor.peek() != '"' {
            // Either a line break or the end of input.
            return Err(SyntaxError::UnexpectedSymbol {
                symbol: self.cursor.peek(),
                location: self.current_location(),
                expected: vec!['"'],
            });
        }
        self.cursor.advance();
        Ok(self.create_token(TokenKind::String, location))
    }

    fn consume_identifier_or_keyword(&mut self, location: Location) -> Token {
        self.cursor
            .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let kind = TokenKind::keyword(self.current_lexeme()).unwrap_or(TokenKind::Identifier);
        self.create_token(kind, location)
    }

    fn consume_comment(&mut self, location: Location) -> Token {
        self.cursor.advance_while(|_| true);
        self.create_token(TokenKind::Comment, location)
    }
}
