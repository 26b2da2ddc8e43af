//! The Assembler module is in charge of taking a
//! UVM-16 source file and producing a Vec<Instruction>
//! of intermediate representation records.
//!
//! It does this with a simple line-oriented parser that
//! resolves each mnemonic against a static instruction
//! set table and assigns operands to format fields.

pub mod error;
pub mod ir;
pub mod isa;
pub mod parser;
