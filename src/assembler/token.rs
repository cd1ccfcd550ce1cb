//! Tokens produced by the lexer and consumed by the parser.
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind {
    At,
    Equals,
    Semicolon,
    Operator,
    LeftBracket,
    RightBracket,
    /// Symbol names, registers and destination mnemonics.
    Value,
    /// A run made up only of decimal digits.
    Number,
    /// One of the seven reserved jump mnemonics.
    Jump,
    Invalid,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TokenKind::*;
        let name = match self {
            At           => "AT",
            Equals       => "EQUALS",
            Semicolon    => "SEMICOLON",
            Operator     => "OPERATOR",
            LeftBracket  => "LEFT_BRACKET",
            RightBracket => "RIGHT_BRACKET",
            Value        => "VALUE",
            Number       => "NUMBER",
            Jump         => "JUMP",
            Invalid      => "INVALID",
            Eof          => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// Line and column (both 1-based) of the first character of a lexeme.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, position: Position) -> Self {
        Token { kind, lexeme: lexeme.into(), position }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            kind => write!(f, "{} `{}`", kind, self.lexeme),
        }
    }
}

/// Classifies a maximal identifier-like run.
pub fn classify(lexeme: &str) -> TokenKind {
    if lexeme.chars().all(|c| c.is_ascii_digit()) {
        return TokenKind::Number;
    }

    match lexeme {
        "JGT" | "JEQ" | "JGE" |
        "JLT" | "JNE" | "JLE" |
        "JMP"  => TokenKind::Jump,
        _      => TokenKind::Value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("0"), TokenKind::Number);
        assert_eq!(classify("32767"), TokenKind::Number);
        assert_eq!(classify("R0"), TokenKind::Value);
        assert_eq!(classify("0x10"), TokenKind::Value);
        assert_eq!(classify("LOOP.end$1"), TokenKind::Value);

        for jump in &["JGT", "JEQ", "JGE", "JLT", "JNE", "JLE", "JMP"] {
            assert_eq!(classify(jump), TokenKind::Jump);
        }

        // Jump mnemonics are case-sensitive.
        assert_eq!(classify("jmp"), TokenKind::Value);
        assert_eq!(classify("JMPX"), TokenKind::Value);
    }

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Number, "12", Position::new(3, 4));
        assert_eq!(tok.to_string(), "NUMBER `12`");
        assert_eq!(Token::new(TokenKind::Eof, "", Position::default()).to_string(), "EOF");
        assert_eq!(TokenKind::LeftBracket.to_string(), "LEFT_BRACKET");
        assert_eq!(Position::new(3, 4).to_string(), "line 3 column 4");
    }
}
