//! Fatal assembly errors. Any of these aborts the whole run;
//! the caller decides how to report and what exit status to use.

use std::error;
use std::fmt;

/// Line numbers are 1-based, matching editor display.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AsmError {
    /// The mnemonic token is not in the instruction set table.
    UnknownMnemonic { mnemonic: String, line: usize },
    /// An operand token is not a valid integer literal in its base.
    MalformedOperand { token: String, line: usize },
    /// Fewer operand tokens than the instruction format requires.
    OperandCountMismatch {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
        line: usize,
    },
    /// The source could not be read.
    Io { message: String, line: usize },
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AsmError::UnknownMnemonic { mnemonic, line } => {
                write!(f, "unknown mnemonic `{}` on line {}", mnemonic, line)
            }
            AsmError::MalformedOperand { token, line } => {
                write!(f, "malformed operand `{}` on line {}", token, line)
            }
            AsmError::OperandCountMismatch { mnemonic, expected, found, line } => {
                write!(
                    f,
                    "{} takes {} operand(s) but got {} on line {}",
                    mnemonic, expected, found, line
                )
            }
            AsmError::Io { message, line } => {
                write!(f, "error reading line {}: {}", line, message)
            }
        }
    }
}

impl error::Error for AsmError {}
