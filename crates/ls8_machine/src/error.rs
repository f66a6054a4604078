use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a program image into bytes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open program file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read program")]
    Read(#[from] io::Error),
    /// A line that is neither blank nor a comment did not hold an 8-bit
    /// base-2 literal.
    #[error("line {line}: invalid binary literal '{text}'")]
    InvalidLiteral { line: usize, text: String },
    #[error("program is {len} bytes, larger than the 256 byte address space")]
    ProgramTooLarge { len: usize },
}

/// Faults raised while the machine is running.
///
/// Every variant leaves the machine halted.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("illegal instruction 0x{opcode:02X} at PC=0x{pc:02X}")]
    IllegalInstruction { opcode: u8, pc: u8 },
    #[error("division by zero at PC=0x{pc:02X}")]
    DivisionByZero { pc: u8 },
    #[error("unsupported ALU operation 0x{opcode:02X}")]
    UnsupportedOperation { opcode: u8 },
    #[error("failed to write program output")]
    Output(#[from] io::Error),
}
