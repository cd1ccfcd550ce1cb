//! This lexer tokenizes Hack assembly.
//!
//! Whitespace and `//` line comments are insignificant. Unknown characters
//! become `INVALID` tokens rather than errors; whether they are fatal is
//! the parser's decision.
use std::collections::VecDeque;
use super::token::{self, Position, Token, TokenKind};

pub struct Lexer {
    source: Vec<char>,
    index: usize,
    position: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            index: 0,
            position: Position::default(),
        }
    }

    /// Rewinds to the start of the source.
    pub fn reset(&mut self) {
        self.index = 0;
        self.position = Position::default();
    }

    /// Produces the next token. Once the input is exhausted every call
    /// returns `EOF`.
    pub fn advance(&mut self) -> Token {
        self.skip_comments_and_whitespace();

        let start = self.position;
        let c = match self.current() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", start),
        };

        let kind = match c {
            '(' => TokenKind::LeftBracket,
            ')' => TokenKind::RightBracket,
            '@' => TokenKind::At,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Equals,
            '+' | '-' | '!' | '&' | '|' => TokenKind::Operator,
            c if is_value_char(c) => {
                let lexeme = self.read_value();
                return Token::new(token::classify(&lexeme), lexeme, start);
            },
            _ => {
                debug!("invalid character {:?} at {}", c, start);
                TokenKind::Invalid
            },
        };

        self.bump();
        Token::new(kind, c.to_string(), start)
    }

    fn skip_comments_and_whitespace(&mut self) {
        loop {
            while self.current().map_or(false, |c| c.is_ascii_whitespace()) {
                self.bump();
            }

            if self.current() == Some('/') && self.peek() == Some('/') {
                while self.current().map_or(false, |c| c != '\n') {
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn read_value(&mut self) -> String {
        let mut sb = String::new();
        while let Some(c) = self.current().filter(|c| is_value_char(*c)) {
            sb.push(c);
            self.bump();
        }
        sb
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.source.get(self.index).copied()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source.get(self.index + 1).copied()
    }

    fn bump(&mut self) {
        if let Some(c) = self.current() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
            self.index += 1;
        }
    }
}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '$'
}

/// Collects every token of `source`, ending with exactly one `EOF`.
pub fn tokenize(source: &str) -> VecDeque<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: VecDeque<Token> = VecDeque::with_capacity(256);

    loop {
        let tok = lexer.advance();
        let done = tok.is(TokenKind::Eof);
        tokens.push_back(tok);
        if done {
            break;
        }
    }

    tokens
}
