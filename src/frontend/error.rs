use crate::frontend::location::{Location, LocationRange};
use crate::frontend::token::{Token, TokenKind};
use thiserror::Error;

/// Malformed input found by the lexer or the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(
        "Syntax error: unexpected symbol {} at {location}{}",
        printable(.symbol),
        expected_symbols(.expected)
    )]
    UnexpectedSymbol {
        symbol: char,
        location: Location,
        expected: Vec<char>,
    },
    #[error(
        "Syntax error: unexpected token {} at {}{}",
        .token,
        .token.location,
        expected_kinds(.expected)
    )]
    UnexpectedToken {
        token: Token,
        expected: Vec<TokenKind>,
    },
    #[error(
        "Syntax error: unexpected end of tokens at {location}{}",
        expected_kinds(.expected)
    )]
    UnexpectedEndOfTokens {
        expected: Vec<TokenKind>,
        location: Location,
    },
    #[error("Syntax error: nesting deeper than {limit} levels at {location}")]
    NestingTooDeep { limit: usize, location: Location },
}

impl SyntaxError {
    pub fn location(&self) -> &Location {
        match self {
            SyntaxError::UnexpectedSymbol { location, .. } => location,
            SyntaxError::UnexpectedToken { token, .. } => &token.location,
            SyntaxError::UnexpectedEndOfTokens { location, .. } => location,
            SyntaxError::NestingTooDeep { location, .. } => location,
        }
    }

    pub fn range(&self) -> LocationRange {
        match self {
            SyntaxError::UnexpectedToken { token, .. } => token.range(),
            _ => single_column(self.location()),
        }
    }
}

/// A structurally valid input that still cannot be given a meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Semantic error: {message} at {location}")]
pub struct SemanticError {
    pub location: Location,
    pub message: String,
}

impl SemanticError {
    pub fn new(location: Location, message: impl Into<String>) -> SemanticError {
        SemanticError {
            location,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl ParseError {
    pub fn location(&self) -> &Location {
        match self {
            ParseError::Syntax(err) => err.location(),
            ParseError::Semantic(err) => &err.location,
        }
    }

    pub fn range(&self) -> LocationRange {
        match self {
            ParseError::Syntax(err) => err.range(),
            ParseError::Semantic(err) => single_column(&err.location),
        }
    }
}

fn single_column(location: &Location) -> LocationRange {
    LocationRange::new(location.clone(), location.shifted(1))
}

fn printable(symbol: &char) -> String {
    if symbol.is_control() {
        format!("\\x{:02x}", *symbol as u32)
    } else {
        symbol.to_string()
    }
}

fn expected_symbols(expected: &[char]) -> String {
    match expected {
        [] => String::new(),
        [symbol] => format!(", expected symbol {}", printable(symbol)),
        symbols => {
            let symbols: Vec<_> = symbols.iter().map(printable).collect();
            format!(", expected one of symbols: {}", symbols.join(" "))
        }
    }
}

fn expected_kinds(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::new(),
        [kind] => format!(", expected token type: {}", kind.describe()),
        kinds => {
            let kinds: Vec<_> = kinds.iter().map(|kind| kind.describe()).collect();
            format!(", expected one of token types: {}", kinds.join(", "))
        }
    }
}
