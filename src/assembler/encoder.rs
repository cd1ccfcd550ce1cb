//! Encodes resolved instructions into 16-bit Hack machine words.
//!
//! ```text
//! A-instruction:  0vvv vvvv vvvv vvvv   v = 15-bit address or constant
//! C-instruction:  111a cccc ccdd djjj   ac = computation, d = destination, j = jump
//! ```
use super::ast::ComputeInstruction;
use super::error::{ErrorKind, Mnemonic};
use super::symbols::Address;

pub const MAX_ADDRESS: Address = 0x7FFF;

const C_OPCODE: u16 = 0b111 << 13;

/// Encodes `@value` once any symbol has been resolved.
pub fn encode_address(value: Address) -> Result<u16, ErrorKind> {
    if value > MAX_ADDRESS {
        return Err(ErrorKind::AddressOutOfRange(value));
    }
    Ok(value as u16)
}

/// Encodes `dest=comp;jump`. Absent fields encode as zero bits.
pub fn encode_compute(ins: &ComputeInstruction) -> Result<u16, ErrorKind> {
    let key = ins.computation.to_string();
    let comp = computation_bits(&key)
        .ok_or_else(|| ErrorKind::UnknownMnemonic(Mnemonic::Computation, key))?;

    let dest = match &ins.destination {
        Some(d) => destination_bits(d)
            .ok_or_else(|| ErrorKind::UnknownMnemonic(Mnemonic::Destination, d.clone()))?,
        None => 0b000,
    };

    let jump = match &ins.jump {
        Some(j) => jump_bits(j)
            .ok_or_else(|| ErrorKind::UnknownMnemonic(Mnemonic::Jump, j.clone()))?,
        None => 0b000,
    };

    Ok(C_OPCODE | (comp << 6) | (dest << 3) | jump)
}

/// Renders a word as 16 binary digits, most significant bit first.
pub fn to_binary(word: u16) -> String {
    format!("{:016b}", word)
}

/// The 7-bit `a c1..c6` field. The leading bit selects M over A.
pub fn computation_bits(comp: &str) -> Option<u16> {
    let bits = match comp {
        "0"   => 0b0101010,
        "1"   => 0b0111111,
        "-1"  => 0b0111010,
        "D"   => 0b0001100,
        "A"   => 0b0110000,
        "!D"  => 0b0001101,
        "!A"  => 0b0110001,
        "-D"  => 0b0001111,
        "-A"  => 0b0110011,
        "D+1" => 0b0011111,
        "A+1" => 0b0110111,
        "D-1" => 0b0001110,
        "A-1" => 0b0110010,
        "D+A" => 0b0000010,
        "D-A" => 0b0010011,
        "A-D" => 0b0000111,
        "D&A" => 0b0000000,
        "D|A" => 0b0010101,

        "M"   => 0b1110000,
        "!M"  => 0b1110001,
        "-M"  => 0b1110011,
        "M+1" => 0b1110111,
        "M-1" => 0b1110010,
        "D+M" => 0b1000010,
        "D-M" => 0b1010011,
        "M-D" => 0b1000111,
        "D&M" => 0b1000000,
        "D|M" => 0b1010101,
        _ => return None,
    };
    Some(bits)
}

pub fn destination_bits(dest: &str) -> Option<u16> {
    let bits = match dest {
        "M"   => 0b001,
        "D"   => 0b010,
        "MD"  => 0b011,
        "A"   => 0b100,
        "AM"  => 0b101,
        "AD"  => 0b110,
        "AMD" => 0b111,
        _ => return None,
    };
    Some(bits)
}

pub fn jump_bits(jump: &str) -> Option<u16> {
    let bits = match jump {
        "JGT" => 0b001,
        "JEQ" => 0b010,
        "JGE" => 0b011,
        "JLT" => 0b100,
        "JNE" => 0b101,
        "JLE" => 0b110,
        "JMP" => 0b111,
        _ => return None,
    };
    Some(bits)
}
