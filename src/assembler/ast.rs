//! This AST describes a parsed Hack assembly file.
//!
//! Execution begins with the first instruction in the file.
//! Comments are prefixed with `//` and are single-line only.
//!
//! Supported instructions:
//!
//! ```text
//! @17            // A-instruction: load 17 into A
//! @LOOP          // A-instruction: load the address bound to LOOP
//! (LOOP)         // label: binds LOOP to the next real instruction
//! D=M            // C-instruction: dest=comp
//! D;JGT          // C-instruction: comp;jump
//! AM=M-1;JNE     // C-instruction: dest=comp;jump
//! ```
//!
//! Labels occupy no ROM slot. Symbols that are neither predefined nor
//! declared as labels are variables and get RAM slots from 16 upwards.

use std::fmt;
use super::token::Position;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    Address(Value),
    Compute(ComputeInstruction),
    Label(String),
}

impl Instruction {
    /// Labels are pseudo-instructions and emit nothing.
    pub fn is_real(&self) -> bool {
        !matches!(self, Instruction::Label(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::Address(value) => write!(f, "@{}", value),
            Instruction::Compute(ins)   => write!(f, "{}", ins),
            Instruction::Label(name)    => write!(f, "({})", name),
        }
    }
}

/// Operand of an A-instruction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Literal(u32),
    Symbol(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Literal(n)   => write!(f, "{}", n),
            Value::Symbol(name) => write!(f, "{}", name),
        }
    }
}

/// `dest=comp;jump`. The destination and jump are kept as written and
/// checked against their tables only at encoding time.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ComputeInstruction {
    pub destination: Option<String>,
    pub computation: Computation,
    pub jump: Option<String>,
}

impl fmt::Display for ComputeInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(dest) = &self.destination {
            write!(f, "{}=", dest)?;
        }
        write!(f, "{}", self.computation)?;
        if let Some(jump) = &self.jump {
            write!(f, ";{}", jump)?;
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Computation {
    Unary(Operator, String),
    Binary(String, Operator, String),
    Operand(String),
}

/// Renders the computation without whitespace. This is also the key the
/// encoder looks it up by.
impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Computation::Unary(op, operand)    => write!(f, "{}{}", op, operand),
            Computation::Binary(lhs, op, rhs)  => write!(f, "{}{}{}", lhs, op, rhs),
            Computation::Operand(operand)      => write!(f, "{}", operand),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Not,
    And,
    Or,
}

impl Operator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        use Operator::*;
        match lexeme {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "!" => Some(Not),
            "&" => Some(And),
            "|" => Some(Or),
            _   => None,
        }
    }

    pub fn symbol(&self) -> char {
        use Operator::*;
        match self {
            Plus  => '+',
            Minus => '-',
            Not   => '!',
            And   => '&',
            Or    => '|',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An instruction together with where it started in the source.
#[derive(Clone, Debug)]
pub struct Statement {
    pub instruction: Instruction,
    pub position: Position,
}

/// Programs compare equal when their instruction sequences do;
/// source positions are ignored.
impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.instruction == other.instruction
    }
}

impl Eq for Statement {}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: Vec::new() }
    }

    pub fn push(&mut self, instruction: Instruction, position: Position) {
        self.statements.push(Statement { instruction, position });
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.statements.iter().map(|s| &s.instruction)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// One instruction per line, in source order.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, ins) in self.instructions().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", ins)?;
        }
        Ok(())
    }
}
