//! Two-pass assembly of a parsed program.
//!
//! Pass 1 binds every label to the ROM address of the instruction that
//! follows it. Pass 2 hands out RAM slots to variables in first-use order
//! and encodes each real instruction.
//!
//! Variable allocation does not stop at the memory-mapped I/O region:
//! a program with more than 16368 variables will be given addresses that
//! alias SCREEN and KBD.
use super::ast::{Instruction, Program, Value};
use super::encoder;
use super::error::{Error, Result};
use super::parser;
use super::symbols::{Address, SymbolTable, VARIABLE_BASE};

/// Pass 1: seeds a symbol table and binds every label in `program`.
pub fn resolve_labels(program: &Program) -> Result<SymbolTable> {
    let mut st = SymbolTable::seed();
    let mut rom: Address = 0;
    let mut labels = 0usize;

    for stmt in &program.statements {
        match &stmt.instruction {
            Instruction::Label(name) => {
                st.bind(name, rom).map_err(|kind| Error::new(kind, stmt.position))?;
                debug!("label {} => ROM 0x{:04X}", name, rom);
                labels += 1;
            },
            Instruction::Address(_) | Instruction::Compute(_) => rom += 1,
        }
    }

    info!("pass 1: bound {} label(s) over {} instruction(s)", labels, rom);
    Ok(st)
}

/// Pass 2: allocates variables and encodes every real instruction in
/// source order. Labels are skipped; they were consumed by pass 1.
pub fn allocate_and_encode(program: &Program, st: &mut SymbolTable) -> Result<Vec<String>> {
    let mut next_free: Address = VARIABLE_BASE;
    let mut words: Vec<String> = Vec::with_capacity(program.len());

    for stmt in &program.statements {
        let at = |kind| Error::new(kind, stmt.position);

        let word = match &stmt.instruction {
            Instruction::Label(_) => continue,
            Instruction::Address(Value::Literal(n)) => encoder::encode_address(*n).map_err(at)?,
            Instruction::Address(Value::Symbol(name)) => {
                if !st.contains(name) {
                    st.bind(name, next_free).map_err(at)?;
                    debug!("variable {} => RAM {}", name, next_free);
                    next_free += 1;
                }
                let address = st.lookup(name).map_err(at)?;
                encoder::encode_address(address).map_err(at)?
            },
            Instruction::Compute(ins) => encoder::encode_compute(ins).map_err(at)?,
        };

        words.push(encoder::to_binary(word));
    }

    info!("pass 2: allocated {} variable(s), emitted {} word(s)",
        next_free - VARIABLE_BASE, words.len());
    Ok(words)
}

/// Translates a whole source file into newline-joined binary words.
pub fn assemble(source: &str) -> Result<String> {
    let program = parser::parse(source)?;
    let mut st = resolve_labels(&program)?;
    let words = allocate_and_encode(&program, &mut st)?;
    Ok(words.join("\n"))
}
