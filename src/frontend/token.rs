use crate::frontend::location::{Location, LocationRange};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End-of-input sentinel.
    Invalid,

    Integer,
    String,
    Identifier,
    True,
    False,
    Comma,
    If,
    Else,

    Plus,
    Minus,
    Bang,

    Equal,
    PlusEquals,
    MinusEquals,
    EqualEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    And,
    Or,
    Dot,

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    Comment,
}

impl TokenKind {
    pub const ASSIGNMENT_OPS: [TokenKind; 3] =
        [TokenKind::Equal, TokenKind::PlusEquals, TokenKind::MinusEquals];

    pub const LITERALS: [TokenKind; 4] = [
        TokenKind::Integer,
        TokenKind::String,
        TokenKind::True,
        TokenKind::False,
    ];

    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }

    /// The fixed text of keywords, operators and punctuation.
    pub fn spelling(self) -> Option<&'static str> {
        use TokenKind::*;
        let glyph = match self {
            True => "true",
            False => "false",
            Comma => ",",
            If => "if",
            Else => "else",
            Plus => "+",
            Minus => "-",
            Bang => "!",
            Equal => "=",
            PlusEquals => "+=",
            MinusEquals => "-=",
            EqualEqual => "==",
            NotEqual => "!=",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Less => "<",
            Greater => ">",
            And => "&&",
            Or => "||",
            Dot => ".",
            LeftParen => "(",
            RightParen => ")",
            LeftBracket => "[",
            RightBracket => "]",
            LeftBrace => "{",
            RightBrace => "}",
            Invalid | Integer | String | Identifier | Comment => return None,
        };
        Some(glyph)
    }

    /// Binding strength of operators; higher binds tighter.
    ///
    /// # Panics
    ///
    /// If the kind is not an operator.
    pub fn precedence(self) -> u8 {
        use TokenKind::*;
        match self {
            Equal | PlusEquals | MinusEquals => 1,
            Or => 2,
            And => 3,
            EqualEqual | NotEqual => 4,
            LessEqual | GreaterEqual | Less | Greater => 5,
            Plus | Minus => 6,
            Bang => 7,
            _ => panic!("{} has no precedence", self.describe()),
        }
    }

    /// Precedence of the kind when it acts as a binary operator inside an expression.
    pub fn binary_precedence(self) -> Option<u8> {
        use TokenKind::*;
        match self {
            Plus | Minus | EqualEqual | NotEqual | LessEqual | GreaterEqual | Less | Greater
            | And | Or => Some(self.precedence()),
            _ => None,
        }
    }

    pub fn describe(self) -> &'static str {
        use TokenKind::*;
        match self {
            Invalid => "end of input",
            Integer => "integer literal",
            String => "string literal",
            Identifier => "identifier",
            True => "\"true\" keyword",
            False => "\"false\" keyword",
            Comma => "comma",
            If => "\"if\" keyword",
            Else => "\"else\" keyword",
            Plus => "addition",
            Minus => "subtraction",
            Bang => "logical \"not\"",
            Equal => "assignment",
            PlusEquals => "appending assignment",
            MinusEquals => "removing assignment",
            EqualEqual => "equality",
            NotEqual => "inequality",
            LessEqual => "\"less or equal\" comparison",
            GreaterEqual => "\"greater or equal\" comparison",
            Less => "\"strictly less\" comparison",
            Greater => "\"strictly greater\" comparison",
            And => "logical \"and\"",
            Or => "logical \"or\"",
            Dot => "scope access",
            LeftParen => "left parenthesis",
            RightParen => "right parenthesis",
            LeftBracket => "left bracket",
            RightBracket => "right bracket",
            LeftBrace => "left brace",
            RightBrace => "right brace",
            Comment => "comment",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Token {
    /// Creates a token. Fixed-spelling kinds ignore `value` and take their canonical text.
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Token {
        debug_assert_ne!(kind, TokenKind::Invalid, "use Token::end_of_input");
        let value = match kind.spelling() {
            Some(glyph) => glyph.to_string(),
            None => value.into(),
        };
        Token {
            kind,
            value,
            location,
        }
    }

    pub fn end_of_input(location: Location) -> Token {
        Token {
            kind: TokenKind::Invalid,
            value: String::new(),
            location,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    pub fn precedence(&self) -> u8 {
        self.kind.precedence()
    }

    pub fn range(&self) -> LocationRange {
        let width = self.value.chars().count().max(1) as u32;
        LocationRange::new(self.location.clone(), self.location.shifted(width))
    }

    /// Same kind and text, wherever the tokens are.
    pub fn same_as(&self, other: &Token) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Invalid => write!(f, "<end of input>"),
            _ => write!(f, "{}", self.value),
        }
    }
}
