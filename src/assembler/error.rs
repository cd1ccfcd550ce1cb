//! Errors raised while assembling. Every one of them is fatal.
use std::fmt;
use thiserror::Error;
use super::symbols::Address;
use super::token::{Position, Token};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mnemonic {
    Computation,
    Destination,
    Jump,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mnemonic::Computation => write!(f, "computation"),
            Mnemonic::Destination => write!(f, "destination"),
            Mnemonic::Jump        => write!(f, "jump"),
        }
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The grammar expected one thing and the source held another.
    /// This also covers characters the lexer could not classify.
    #[error("expected {expected} but found {found}")]
    UnexpectedToken { expected: String, found: Token },

    #[error("symbol `{0}` is already defined")]
    DuplicateSymbol(String),

    #[error("symbol `{0}` is not defined")]
    UnboundSymbol(String),

    #[error("unknown {0} mnemonic `{1}`")]
    UnknownMnemonic(Mnemonic, String),

    #[error("value {0} does not fit in 15 bits (max 32767)")]
    AddressOutOfRange(Address),
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("{position}: {kind}")]
pub struct Error {
    pub kind: ErrorKind,
    pub position: Position,
}

impl Error {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Error { kind, position }
    }

    pub fn unexpected<S: Into<String>>(expected: S, found: Token) -> Self {
        let position = found.position;
        Error::new(ErrorKind::UnexpectedToken { expected: expected.into(), found }, position)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::token::TokenKind;

    #[test]
    fn test_display() {
        let found = Token::new(TokenKind::Invalid, "#", Position::new(2, 7));
        let err = Error::unexpected("VALUE", found);
        assert_eq!(err.position, Position::new(2, 7));
        assert_eq!(err.to_string(), "line 2 column 7: expected VALUE but found INVALID `#`");

        let err = Error::new(ErrorKind::UnknownMnemonic(Mnemonic::Jump, "JXX".to_owned()), Position::new(1, 1));
        assert_eq!(err.to_string(), "line 1 column 1: unknown jump mnemonic `JXX`");

        let err = Error::new(ErrorKind::UnboundSymbol("LOOP".to_owned()), Position::new(4, 2));
        assert_eq!(err.to_string(), "line 4 column 2: symbol `LOOP` is not defined");

        let err = Error::new(ErrorKind::AddressOutOfRange(32768), Position::new(1, 2));
        assert_eq!(err.to_string(), "line 1 column 2: value 32768 does not fit in 15 bits (max 32767)");
    }
}
