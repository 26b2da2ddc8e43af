//! The parser takes source text line by line and converts it
//! into the IR sequence.
//!
//! Source lines look like `MNEMONIC, operand1[, operand2[, operand3]]`.
//! Blank lines and `#` comment lines produce nothing. A line with
//! fewer than two comma-separated tokens is skipped silently rather
//! than rejected. Everything else either becomes exactly one record
//! or aborts the run.

use std::io::{BufRead, BufReader, Read};

use super::error::AsmError;
use super::ir::Instruction;
use super::isa;
use super::isa::Op;

/// Holds the IR for one assembly run. The sequence is cleared at
/// the start of each `assemble` call, so an instance may be reused
/// across runs but never shared between concurrent ones.
pub struct Assembler {
    ir: Vec<Instruction>,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler { ir: Vec::new() }
    }

    /// Runs the parser over the whole source, in line order.
    ///
    /// All-or-nothing: the first fatal error aborts the run and the
    /// partial sequence is discarded on the next call.
    pub fn assemble<T: Read + ?Sized>(&mut self, reader: Box<T>) -> Result<&[Instruction], AsmError> {
        self.ir.clear();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line_num = index + 1;
            let line = line.map_err(|e| AsmError::Io {
                message: e.to_string(),
                line: line_num,
            })?;

            if let Some(ins) = parse_line(&line, line_num)? {
                debug!("line {}: {}", line_num, ins);
                self.ir.push(ins);
            }
        }

        Ok(&self.ir)
    }
}

/// Converts one line of source into zero or one IR record.
fn parse_line(line: &str, line_num: usize) -> Result<Option<Instruction>, AsmError> {
    // Blank lines and comment lines produce nothing.
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // A line without at least one comma cannot carry an instruction;
    // it is skipped the same way a comment is.
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 2 {
        return Ok(None);
    }

    let mnemonic = parts[0].trim().to_uppercase();
    let desc = match isa::lookup_by_mnemonic(&mnemonic) {
        Some(desc) => desc,
        None => {
            return Err(AsmError::UnknownMnemonic {
                mnemonic,
                line: line_num,
            })
        }
    };

    // All operand tokens are parsed before fields are assigned, so a
    // malformed token is reported even in a surplus position.
    let mut operands = Vec::with_capacity(parts.len() - 1);
    for token in &parts[1..] {
        operands.push(parse_operand(token, line_num)?);
    }

    build_instruction(desc, &operands, line_num).map(Some)
}

/// Parses one operand token as an unsigned integer. Tokens with a
/// `0x` prefix are hexadecimal, all others decimal.
fn parse_operand(token: &str, line_num: usize) -> Result<u32, AsmError> {
    let token = token.trim();

    let parsed = if token.starts_with("0x") {
        u32::from_str_radix(&token[2..], 16)
    } else {
        u32::from_str_radix(token, 10)
    };

    parsed.map_err(|_| AsmError::MalformedOperand {
        token: token.to_string(),
        line: line_num,
    })
}

/// Assigns positional operands to the fields of the resolved
/// instruction format. Surplus operands are ignored.
fn build_instruction(
    desc: &isa::InstructionDescriptor,
    operands: &[u32],
    line_num: usize,
) -> Result<Instruction, AsmError> {
    let require = |n: usize| -> Result<(), AsmError> {
        if operands.len() < n {
            Err(AsmError::OperandCountMismatch {
                mnemonic: desc.mnemonic,
                expected: n,
                found: operands.len(),
                line: line_num,
            })
        } else {
            Ok(())
        }
    };

    match desc.op {
        Op::LoadConst => {
            require(2)?;
            Ok(Instruction::LoadConst { value: operands[0], dst: operands[1] })
        }
        Op::ReadMem => {
            require(3)?;
            Ok(Instruction::ReadMem { base: operands[0], offset: operands[1], dst: operands[2] })
        }
        Op::WriteMem => {
            require(2)?;
            Ok(Instruction::WriteMem { src: operands[0], dst: operands[1] })
        }
        Op::Popcnt => {
            require(2)?;
            Ok(Instruction::Popcnt { src: operands[0], dst: operands[1] })
        }
    }
}
