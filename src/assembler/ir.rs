//! The intermediate representation produced by one assembly run.
//!
//! Each source instruction becomes one `Instruction` record.
//! The variant is tagged by instruction format, so each record
//! carries exactly the fields its format defines and nothing
//! else. Field A is the opcode and is derived from the variant
//! rather than stored.
//!
//! Field meanings per format:
//!
//! ```text
//! LOAD_CONST  B = constant value         C = destination register
//! READ_MEM    B = base register          C = offset    D = result register
//! WRITE_MEM   B = source register        C = destination register
//! POPCNT      B = source register        C = result register
//! ```

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    LoadConst { value: u32, dst: u32 },
    ReadMem { base: u32, offset: u32, dst: u32 },
    WriteMem { src: u32, dst: u32 },
    Popcnt { src: u32, dst: u32 },
}

impl Instruction {
    /// Returns the opcode (field A) of the instruction.
    pub fn opcode(&self) -> u32 {
        use Instruction::*;
        match self {
            WriteMem { .. }  => 0,
            ReadMem { .. }   => 1,
            Popcnt { .. }    => 5,
            LoadConst { .. } => 7,
        }
    }

    /// Returns the canonical symbolic name of the instruction.
    pub fn symbolic_name(&self) -> &'static str {
        use Instruction::*;
        match self {
            LoadConst { .. } => "LOAD_CONST",
            ReadMem { .. }   => "READ_MEM",
            WriteMem { .. }  => "WRITE_MEM",
            Popcnt { .. }    => "POPCNT",
        }
    }

    /// Returns the named operand fields in canonical B, C, D order.
    pub fn fields(&self) -> Vec<(char, u32)> {
        use Instruction::*;
        match *self {
            LoadConst { value, dst }     => vec![('B', value), ('C', dst)],
            ReadMem { base, offset, dst } => vec![('B', base), ('C', offset), ('D', dst)],
            WriteMem { src, dst }        => vec![('B', src), ('C', dst)],
            Popcnt { src, dst }          => vec![('B', src), ('C', dst)],
        }
    }
}

/// Renders the record in the debug dump format:
/// `SYMBOLIC_NAME: A=<opcode>, B=<value>[, C=<value>[, D=<value>]]`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: A={}", self.symbolic_name(), self.opcode())?;
        for (name, value) in self.fields() {
            write!(f, ", {}={}", name, value)?;
        }
        Ok(())
    }
}
