//! The static UVM-16 instruction set table.
//!
//! The table maps each mnemonic appearing in source text
//! (e.g. `LOAD`) to its canonical symbolic name
//! (e.g. `LOAD_CONST`) and opcode. It is fixed at compile
//! time and read-only; the parser only ever queries it.

/// Format tag for an instruction set entry. The parser matches
/// on this exhaustively to assign operands to fields, so adding
/// a variant here forces supplying a field layout there.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Op {
    WriteMem,
    ReadMem,
    Popcnt,
    LoadConst,
}

/// One entry of the instruction set table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct InstructionDescriptor {
    pub op: Op,
    pub symbolic_name: &'static str,
    pub opcode: u32,
    pub mnemonic: &'static str,
}

/// Every instruction the UVM-16 defines. Mnemonics are
/// canonical upper-case; each mnemonic and each opcode
/// appears exactly once.
pub const INSTRUCTION_SET: &[InstructionDescriptor] = &[
    InstructionDescriptor { op: Op::WriteMem,  symbolic_name: "WRITE_MEM",  opcode: 0, mnemonic: "WRITE"  },
    InstructionDescriptor { op: Op::ReadMem,   symbolic_name: "READ_MEM",   opcode: 1, mnemonic: "READ"   },
    InstructionDescriptor { op: Op::Popcnt,    symbolic_name: "POPCNT",     opcode: 5, mnemonic: "POPCNT" },
    InstructionDescriptor { op: Op::LoadConst, symbolic_name: "LOAD_CONST", opcode: 7, mnemonic: "LOAD"   },
];

/// Resolves a mnemonic to its descriptor. The comparison is
/// exact; callers are expected to upper-case the token first.
pub fn lookup_by_mnemonic(mnemonic: &str) -> Option<&'static InstructionDescriptor> {
    INSTRUCTION_SET.iter().find(|d| d.mnemonic == mnemonic)
}

/// Resolves an opcode back to its descriptor.
pub fn lookup_by_opcode(opcode: u32) -> Option<&'static InstructionDescriptor> {
    INSTRUCTION_SET.iter().find(|d| d.opcode == opcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_mnemonic() {
        assert_eq!(lookup_by_mnemonic("WRITE").map(|d| d.symbolic_name), Some("WRITE_MEM"));
        assert_eq!(lookup_by_mnemonic("READ").map(|d| d.symbolic_name), Some("READ_MEM"));
        assert_eq!(lookup_by_mnemonic("POPCNT").map(|d| d.symbolic_name), Some("POPCNT"));
        assert_eq!(lookup_by_mnemonic("LOAD").map(|d| d.symbolic_name), Some("LOAD_CONST"));

        // Lookups are exact; case folding happens in the parser.
        assert_eq!(lookup_by_mnemonic("load"), None);
        assert_eq!(lookup_by_mnemonic(" LOAD "), None);
        assert_eq!(lookup_by_mnemonic("LOAD_CONST"), None);
        assert_eq!(lookup_by_mnemonic(""), None);
        assert_eq!(lookup_by_mnemonic("FOO"), None);
    }

    #[test]
    fn test_lookup_by_opcode() {
        assert_eq!(lookup_by_opcode(0).map(|d| d.mnemonic), Some("WRITE"));
        assert_eq!(lookup_by_opcode(1).map(|d| d.mnemonic), Some("READ"));
        assert_eq!(lookup_by_opcode(5).map(|d| d.mnemonic), Some("POPCNT"));
        assert_eq!(lookup_by_opcode(7).map(|d| d.mnemonic), Some("LOAD"));

        assert_eq!(lookup_by_opcode(2), None);
        assert_eq!(lookup_by_opcode(u32::MAX), None);
    }

    #[test]
    fn test_table_is_injective() {
        for (i, a) in INSTRUCTION_SET.iter().enumerate() {
            for b in INSTRUCTION_SET.iter().skip(i + 1) {
                assert_ne!(a.mnemonic, b.mnemonic);
                assert_ne!(a.symbolic_name, b.symbolic_name);
                assert_ne!(a.opcode, b.opcode);
            }
        }
    }
}
