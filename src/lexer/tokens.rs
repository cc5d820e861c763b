use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("IfTrue", TokenKind::Condition);
        map.insert("Otherwise", TokenKind::Condition);
        map.insert("Imw", TokenKind::Integer);
        map.insert("SIMw", TokenKind::SInteger);
        map.insert("Chj", TokenKind::Character);
        map.insert("Series", TokenKind::String);
        map.insert("IMwf", TokenKind::Float);
        map.insert("SIMwf", TokenKind::SFloat);
        map.insert("NOReturn", TokenKind::Void);
        map.insert("RepeatWhen", TokenKind::Loop);
        map.insert("Reiterate", TokenKind::Loop);
        map.insert("Turnback", TokenKind::Return);
        map.insert("OutLoop", TokenKind::Break);
        map.insert("Stop", TokenKind::Break);
        map.insert("Loli", TokenKind::Struct);
        map.insert("include", TokenKind::Inclusion);
        map.insert("int", TokenKind::Integer);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Identifier,
    Constant,
    StringLiteral,
    CharacterLiteral,

    // Data-type keywords
    Integer,
    SInteger,
    Character,
    String,
    Float,
    SFloat,
    Void,
    Struct,

    // Control keywords
    Condition,
    Loop,
    Return,
    Break,

    // Operator classes
    ArithmeticOp,
    LogicOp,
    RelationalOp,
    AssignmentOp,
    AccessOp,
    AddOp,
    MulOp,
    Ampersand,

    // Punctuation; every bracket kind shares the Brace category
    Brace,
    Comma,
    Colon,
    Semicolon,

    CommentStart,
    CommentContent,
    CommentEnd,
    LineCommentStart,
    LineCommentContent,

    Inclusion,

    // Error family
    Invalid,
    InvalidComment,
    InvalidInclusion,
    UnterminatedString,
    UnterminatedChar,
    InvalidIdentifier,
    Unknown,
}

impl TokenKind {
    /// True for the error-family categories. A token's error flag is
    /// derived from this, never set independently.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::Invalid
                | TokenKind::InvalidComment
                | TokenKind::InvalidInclusion
                | TokenKind::UnterminatedString
                | TokenKind::UnterminatedChar
                | TokenKind::InvalidIdentifier
                | TokenKind::Unknown
        )
    }

    pub fn is_data_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::SInteger
                | TokenKind::Character
                | TokenKind::String
                | TokenKind::Float
                | TokenKind::SFloat
                | TokenKind::Void
                | TokenKind::Struct
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub line: u32,
    pub text: String,
    pub kind: TokenKind,
    pub error: bool,
}

impl Token {
    pub fn eof(line: u32) -> Token {
        Token {
            line,
            text: String::new(),
            kind: TokenKind::Eof,
            error: false,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.text)
    }
}
