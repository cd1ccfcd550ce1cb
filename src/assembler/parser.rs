//! The Parser module pulls tokens from the Lexer and converts them into an AST.
//!
//! It is a recursive descent parser with a two token window: `current`
//! plus one token of lookahead, which is only needed to tell
//! `dest=comp` apart from a bare `comp`.
//!
//! ```text
//! Program      := Instruction* EOF
//! Instruction  := AddressInstr | LabelInstr | ComputeInstr
//! AddressInstr := AT (NUMBER | VALUE)
//! LabelInstr   := LEFT_BRACKET VALUE RIGHT_BRACKET
//! ComputeInstr := [VALUE EQUALS] Computation [SEMICOLON JUMP]
//! Computation  := OPERATOR Operand | Operand OPERATOR Operand | Operand
//! Operand      := NUMBER | VALUE
//! ```
use std::mem;
use super::ast::*;
use super::error::{Error, Result};
use super::symbols::Address;
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.advance();
        let peek = lexer.advance();
        Parser { lexer, current, peek }
    }

    /// Run the parser, consuming itself and returning the program.
    /// The first malformed instruction aborts the run.
    pub fn run(mut self) -> Result<Program> {
        let mut program = Program::new();

        while !self.current.is(TokenKind::Eof) {
            let position = self.current.position;
            let ins = self.instruction()?;
            program.push(ins, position);
        }

        debug!("parsed {} instruction(s)", program.len());
        Ok(program)
    }

    fn instruction(&mut self) -> Result<Instruction> {
        match self.current.kind {
            TokenKind::At          => self.address_instruction(),
            TokenKind::LeftBracket => self.label_instruction(),
            _                      => self.compute_instruction(),
        }
    }

    fn address_instruction(&mut self) -> Result<Instruction> {
        self.expect(TokenKind::At)?;

        match self.current.kind {
            TokenKind::Number => {
                let tok = self.consume();
                Ok(Instruction::Address(Value::Literal(number(&tok.lexeme))))
            },
            TokenKind::Value => Ok(Instruction::Address(Value::Symbol(self.consume().lexeme))),
            _ => Err(self.unexpected("NUMBER or VALUE")),
        }
    }

    fn label_instruction(&mut self) -> Result<Instruction> {
        self.expect(TokenKind::LeftBracket)?;
        let name = self.expect(TokenKind::Value)?.lexeme;
        self.expect(TokenKind::RightBracket)?;

        Ok(Instruction::Label(name))
    }

    fn compute_instruction(&mut self) -> Result<Instruction> {
        let destination = if self.peek.is(TokenKind::Equals) {
            let dest = self.expect(TokenKind::Value)?.lexeme;
            self.expect(TokenKind::Equals)?;
            Some(dest)
        } else {
            None
        };

        let computation = self.computation()?;

        let jump = if self.current.is(TokenKind::Semicolon) {
            self.consume();
            Some(self.expect(TokenKind::Jump)?.lexeme)
        } else {
            None
        };

        Ok(Instruction::Compute(ComputeInstruction { destination, computation, jump }))
    }

    fn computation(&mut self) -> Result<Computation> {
        // Prefix: `!D`, `-1`.
        if self.current.is(TokenKind::Operator) {
            let op = self.operator()?;
            return Ok(Computation::Unary(op, self.operand()?));
        }

        let lhs = self.operand()?;

        // Infix: `D+1`, `D&M`.
        if self.current.is(TokenKind::Operator) {
            let op = self.operator()?;
            return Ok(Computation::Binary(lhs, op, self.operand()?));
        }

        Ok(Computation::Operand(lhs))
    }

    fn operator(&mut self) -> Result<Operator> {
        let tok = self.expect(TokenKind::Operator)?;
        match Operator::from_lexeme(&tok.lexeme) {
            Some(op) => Ok(op),
            None => Err(Error::unexpected("OPERATOR", tok)),
        }
    }

    fn operand(&mut self) -> Result<String> {
        match self.current.kind {
            TokenKind::Number | TokenKind::Value => Ok(self.consume().lexeme),
            _ => Err(self.unexpected("NUMBER or VALUE")),
        }
    }

    /// Consumes the current token if it is of `kind`.
    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.is(kind) {
            Ok(self.consume())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    fn unexpected<S: Into<String>>(&self, expected: S) -> Error {
        Error::unexpected(expected, self.current.clone())
    }

    /// Shifts the window by one token and returns the old current token.
    #[inline]
    fn consume(&mut self) -> Token {
        let next = self.lexer.advance();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }
}

/// NUMBER lexemes are all digits. Values past `Address::MAX` saturate;
/// the encoder rejects anything wider than 15 bits.
fn number(lexeme: &str) -> Address {
    lexeme.bytes().fold(0, |acc: Address, b| {
        acc.saturating_mul(10).saturating_add(Address::from(b - b'0'))
    })
}

/// Lexes and parses `source` in one go.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new(Lexer::new(source)).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::token::Position;

    fn instructions(source: &str) -> Vec<Instruction> {
        parse(source).unwrap().instructions().cloned().collect()
    }

    fn compute(dest: Option<&str>, computation: Computation, jump: Option<&str>) -> Instruction {
        Instruction::Compute(ComputeInstruction {
            destination: dest.map(str::to_owned),
            computation,
            jump: jump.map(str::to_owned),
        })
    }

    fn operand(s: &str) -> Computation {
        Computation::Operand(s.to_owned())
    }

    use super::super::error::ErrorKind;

    fn expected_found(source: &str) -> (String, TokenKind) {
        match parse(source) {
            Err(Error { kind: ErrorKind::UnexpectedToken { expected, found }, .. }) => (expected, found.kind),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_address_instruction() {
        assert_eq!(instructions("@1337"), vec![Instruction::Address(Value::Literal(1337))]);
        assert_eq!(instructions("@i"), vec![Instruction::Address(Value::Symbol("i".to_owned()))]);
        assert_eq!(instructions("@R15"), vec![Instruction::Address(Value::Symbol("R15".to_owned()))]);

        // Range is the encoder's concern.
        assert_eq!(instructions("@40000"), vec![Instruction::Address(Value::Literal(40000))]);
    }

    #[test]
    fn test_label_instruction() {
        assert_eq!(instructions("(LOOP)"), vec![Instruction::Label("LOOP".to_owned())]);
    }

    #[test]
    fn test_compute_instruction() {
        assert_eq!(instructions("A"), vec![compute(None, operand("A"), None)]);
        assert_eq!(instructions("!D"), vec![
            compute(None, Computation::Unary(Operator::Not, "D".to_owned()), None),
        ]);
        assert_eq!(instructions("D+1"), vec![
            compute(None, Computation::Binary("D".to_owned(), Operator::Plus, "1".to_owned()), None),
        ]);
        assert_eq!(instructions("M=D"), vec![compute(Some("M"), operand("D"), None)]);
        assert_eq!(instructions("0;JMP"), vec![compute(None, operand("0"), Some("JMP"))]);
        assert_eq!(instructions("AM = M - 1 ; JNE"), vec![
            compute(Some("AM"), Computation::Binary("M".to_owned(), Operator::Minus, "1".to_owned()), Some("JNE")),
        ]);
    }

    #[test]
    fn test_destination_is_not_validated() {
        assert_eq!(instructions("XYZ=D"), vec![compute(Some("XYZ"), operand("D"), None)]);
    }

    #[test]
    fn test_program() {
        let source = "
            // Sum 1..100
            @i
            M=1
        (LOOP)
            @i
            D=M
            @END
            D;JGT
        (END)
            0;JMP
        ";
        let program = parse(source).unwrap();
        assert_eq!(program.len(), 9);
        assert_eq!(program.statements[2].instruction, Instruction::Label("LOOP".to_owned()));
        assert_eq!(program.statements[2].position, Position::new(5, 9));
        assert_eq!(program.statements[6].instruction, compute(None, operand("D"), Some("JGT")));
    }

    #[test]
    fn test_empty_program() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  // nothing here\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let source = "
            @0
            D=M
            @INFINITE_LOOP
            D;JLE
            @counter
            M=D
            @SCREEN
            D=A
            @address
            M=D
        (LOOP)
            @address
            A=M
            M=-1
            AMD=!M;JNE
            D=D|A
        (INFINITE_LOOP)
            @INFINITE_LOOP
            0;JMP
        ";
        let program = parse(source).unwrap();
        let rendered = program.to_string();
        assert_eq!(parse(&rendered).unwrap(), program);
        assert_eq!(parse(&rendered).unwrap().to_string(), rendered);
    }

    #[test]
    fn test_errors() {
        assert_eq!(expected_found("@"), ("NUMBER or VALUE".to_owned(), TokenKind::Eof));
        assert_eq!(expected_found("@;"), ("NUMBER or VALUE".to_owned(), TokenKind::Semicolon));
        assert_eq!(expected_found("(LOOP"), ("RIGHT_BRACKET".to_owned(), TokenKind::Eof));
        assert_eq!(expected_found("(12)"), ("VALUE".to_owned(), TokenKind::Number));
        assert_eq!(expected_found("D;"), ("JUMP".to_owned(), TokenKind::Eof));
        assert_eq!(expected_found("D;FOO"), ("JUMP".to_owned(), TokenKind::Value));
        assert_eq!(expected_found("0=D"), ("VALUE".to_owned(), TokenKind::Number));
        assert_eq!(expected_found("D=;JMP"), ("NUMBER or VALUE".to_owned(), TokenKind::Semicolon));
        assert_eq!(expected_found("D+"), ("NUMBER or VALUE".to_owned(), TokenKind::Eof));
        assert_eq!(expected_found("D=M # comment"), ("NUMBER or VALUE".to_owned(), TokenKind::Invalid));
    }

    #[test]
    fn test_error_position() {
        let err = parse("@1\nD=M\n  (LOOP\n").unwrap_err();
        assert_eq!(err.position, Position::new(4, 1));

        let err = parse("@1\n  @;").unwrap_err();
        assert_eq!(err.position, Position::new(2, 4));
    }

    #[test]
    fn test_oversized_number_saturates() {
        assert_eq!(instructions("@4294967295"), vec![Instruction::Address(Value::Literal(u32::MAX))]);
        assert_eq!(instructions("@99999999999"), vec![Instruction::Address(Value::Literal(u32::MAX))]);
        assert_eq!(instructions("@007"), vec![Instruction::Address(Value::Literal(7))]);
    }
}
