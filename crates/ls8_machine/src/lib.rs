mod error;
pub mod loader;
pub mod machine;
pub mod opcode;

pub use error::{LoadError, MachineError};
pub use machine::{Flags, Machine, State};
pub use opcode::Opcode;

/// Total addressable memory (256 bytes).
pub const MEMORY_SIZE: usize = 0x100;
/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;
/// Register index reserved for the stack pointer.
pub const SP: usize = 7;
/// Power-on value of the stack pointer.
///
/// The stack grows downward from here; 0xF4..=0xFF is left free for the
/// interrupt vector and key buffer of the full LS-8 memory map.
pub const SP_INIT: u8 = 0xF4;
