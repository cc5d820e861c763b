use std::collections::HashSet;

use crate::{
    errors::errors::{Error, ErrorImpl},
    read_source, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            tokens: vec![],
        }
    }

    fn peek(&self, n: usize) -> char {
        self.chars.get(self.pos + n).copied().unwrap_or('\0')
    }

    fn get(&mut self) -> char {
        let c = self.chars[self.pos];
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && self.chars[self.pos].is_ascii_whitespace() {
            if self.chars[self.pos] == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn run(&mut self, include_chain: &mut HashSet<String>) -> Result<(), Error> {
        while !self.at_eof() {
            self.skip_whitespace();
            if self.at_eof() {
                break;
            }

            let current = self.peek(0);

            if current == '/' && (self.peek(1) == '@' || self.peek(1) == '^') {
                let comment_tokens = self.lex_comment();
                self.tokens.extend(comment_tokens);
            } else if current == '"' {
                let token = self.lex_string();
                self.tokens.push(token);
            } else if current == '\'' {
                let token = self.lex_char();
                self.tokens.push(token);
            } else if current.is_ascii_alphabetic() || current == '_' {
                let keyword_token = self.lex_identifier_or_keyword();
                if keyword_token.kind == TokenKind::Inclusion {
                    self.lex_inclusion(keyword_token, include_chain)?;
                } else {
                    self.tokens.push(keyword_token);
                }
            } else if current.is_ascii_digit()
                || ((current == '-' || current == '+') && self.peek(1).is_ascii_digit())
            {
                let token = self.lex_number();
                self.tokens.push(token);
            } else {
                let token = self.lex_operator_or_punctuation();
                self.tokens.push(token);
            }
        }

        self.tokens.push(Token::eof(self.line));
        Ok(())
    }

    /// Splices an included file's tokens ahead of everything scanned so
    /// far in the current file, then still emits the directive and
    /// filename tokens themselves. The sub-sequence's end-of-stream
    /// token is dropped so exactly one terminator survives.
    fn lex_inclusion(
        &mut self,
        keyword_token: Token,
        include_chain: &mut HashSet<String>,
    ) -> Result<(), Error> {
        self.skip_whitespace();

        if self.peek(0) != '"' {
            let mut invalid = keyword_token;
            invalid.kind = TokenKind::InvalidInclusion;
            invalid.error = true;
            self.tokens.push(invalid);
            return Ok(());
        }

        let file_token = self.lex_string();
        if file_token.kind != TokenKind::StringLiteral {
            let mut invalid = keyword_token;
            invalid.kind = TokenKind::InvalidInclusion;
            invalid.error = true;
            self.tokens.push(invalid);
            self.tokens.push(file_token);
            return Ok(());
        }

        let file_name = file_token.text[1..file_token.text.len() - 1].to_string();
        if !include_chain.insert(file_name.clone()) {
            return Err(Error::new(ErrorImpl::IncludeCycle { file: file_name }));
        }

        let included_source = read_source(&file_name)?;
        let mut included_tokens = tokenize_spliced(&included_source, include_chain)?;
        include_chain.remove(&file_name);

        included_tokens.pop();
        included_tokens.extend(self.tokens.drain(..));
        self.tokens = included_tokens;

        self.tokens.push(keyword_token);
        self.tokens.push(file_token);
        Ok(())
    }

    fn lex_identifier_or_keyword(&mut self) -> Token {
        let line = self.line;
        let mut text = String::new();

        while !self.at_eof() && (self.peek(0).is_ascii_alphanumeric() || self.peek(0) == '_') {
            text.push(self.get());
        }

        let kind = KEYWORD_LOOKUP
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        MK_TOKEN!(line, text, kind)
    }

    fn lex_number(&mut self) -> Token {
        let line = self.line;
        let mut text = String::new();
        let mut seen_dot = false;
        let mut extra_dot = false;

        if self.peek(0) == '-' || self.peek(0) == '+' {
            text.push(self.get());
        }

        while !self.at_eof() && (self.peek(0).is_ascii_digit() || self.peek(0) == '.') {
            if self.peek(0) == '.' {
                if seen_dot {
                    extra_dot = true;
                }
                seen_dot = true;
            }
            text.push(self.get());
        }

        // Digits fused with identifier characters form one invalid
        // identifier, never a constant followed by an identifier.
        if !self.at_eof() && (self.peek(0).is_ascii_alphabetic() || self.peek(0) == '_') {
            while !self.at_eof() && (self.peek(0).is_ascii_alphanumeric() || self.peek(0) == '_') {
                text.push(self.get());
            }
            return MK_TOKEN!(line, text, TokenKind::InvalidIdentifier);
        }

        if extra_dot {
            return MK_TOKEN!(line, text, TokenKind::Invalid);
        }
        MK_TOKEN!(line, text, TokenKind::Constant)
    }

    fn lex_string(&mut self) -> Token {
        let line = self.line;
        let mut text = String::from("\"");
        self.get();

        while !self.at_eof() && self.peek(0) != '"' {
            text.push(self.get());
        }

        if self.peek(0) == '"' {
            text.push(self.get());
            MK_TOKEN!(line, text, TokenKind::StringLiteral)
        } else {
            MK_TOKEN!(line, text, TokenKind::UnterminatedString)
        }
    }

    // One content character at most; anything further sits outside the
    // literal and is scanned on its own.
    fn lex_char(&mut self) -> Token {
        let line = self.line;
        let mut text = String::from("'");
        self.get();

        if !self.at_eof() && self.peek(0) != '\'' {
            text.push(self.get());
        }

        if self.peek(0) == '\'' {
            text.push(self.get());
            MK_TOKEN!(line, text, TokenKind::CharacterLiteral)
        } else {
            MK_TOKEN!(line, text, TokenKind::UnterminatedChar)
        }
    }

    fn lex_operator_or_punctuation(&mut self) -> Token {
        let line = self.line;
        let current = self.get();
        let mut text = String::from(current);

        let kind = match current {
            '=' => {
                if self.peek(0) == '=' {
                    text.push(self.get());
                    TokenKind::RelationalOp
                } else {
                    TokenKind::AssignmentOp
                }
            }
            '<' | '>' => {
                if self.peek(0) == '=' {
                    text.push(self.get());
                }
                TokenKind::RelationalOp
            }
            '!' => {
                if self.peek(0) == '=' {
                    text.push(self.get());
                    TokenKind::RelationalOp
                } else {
                    TokenKind::LogicOp
                }
            }
            '&' => {
                if self.peek(0) == '&' {
                    text.push(self.get());
                    TokenKind::LogicOp
                } else {
                    TokenKind::Ampersand
                }
            }
            '|' => {
                if self.peek(0) == '|' {
                    text.push(self.get());
                    TokenKind::LogicOp
                } else {
                    TokenKind::ArithmeticOp
                }
            }
            '-' => {
                if self.peek(0) == '>' {
                    text.push(self.get());
                    TokenKind::AccessOp
                } else {
                    TokenKind::AddOp
                }
            }
            '+' => TokenKind::AddOp,
            '*' | '/' => TokenKind::MulOp,
            '~' => TokenKind::LogicOp,
            '(' | ')' | '{' | '}' | '[' | ']' => TokenKind::Brace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            _ => TokenKind::Unknown,
        };

        MK_TOKEN!(line, text, kind)
    }

    fn lex_comment(&mut self) -> Vec<Token> {
        let mut comment_tokens = vec![];
        let start_line = self.line;

        if self.peek(1) == '@' {
            self.get();
            self.get();
            comment_tokens.push(MK_TOKEN!(
                start_line,
                String::from("/@"),
                TokenKind::CommentStart
            ));

            let content_line = self.line;
            let mut content = String::new();
            while !self.at_eof() && !(self.peek(0) == '@' && self.peek(1) == '/') {
                content.push(self.get());
            }
            comment_tokens.push(MK_TOKEN!(content_line, content, TokenKind::CommentContent));

            let end_line = self.line;
            if self.peek(0) == '@' && self.peek(1) == '/' {
                self.get();
                self.get();
                comment_tokens.push(MK_TOKEN!(end_line, String::from("@/"), TokenKind::CommentEnd));
            } else {
                comment_tokens.push(MK_TOKEN!(end_line, String::new(), TokenKind::InvalidComment));
            }
        } else if self.peek(1) == '^' {
            self.get();
            self.get();
            comment_tokens.push(MK_TOKEN!(
                start_line,
                String::from("/^"),
                TokenKind::LineCommentStart
            ));

            let content_line = self.line;
            let mut content = String::new();
            while !self.at_eof() && self.peek(0) != '\n' {
                content.push(self.get());
            }
            comment_tokens.push(MK_TOKEN!(
                content_line,
                content,
                TokenKind::LineCommentContent
            ));
        }

        comment_tokens
    }
}

fn tokenize_spliced(
    source: &str,
    include_chain: &mut HashSet<String>,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    lex.run(include_chain)?;
    Ok(lex.tokens)
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut include_chain = HashSet::new();
    tokenize_spliced(source, &mut include_chain)
}
