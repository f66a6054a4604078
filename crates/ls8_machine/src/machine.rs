mod alu;
mod exec;
mod trace;

use std::io::Write;

use bitflags::bitflags;

use crate::{MachineError, Opcode, MEMORY_SIZE, NUM_REGS, SP, SP_INIT};

bitflags! {
    /// Condition flags written by `CMP` and read by the conditional jumps.
    ///
    /// Layout matches the LS-8 `FL` register: `00000LGE`.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Flags: u8 {
        const EQUAL = 0b0000_0001;
        const GREATER = 0b0000_0010;
        const LESS = 0b0000_0100;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    #[default]
    Running,
    /// Terminal: entered through `HLT` or a fault.
    Halted,
}

/// Register operands only address R0–R7; the upper bits are ignored.
#[inline]
fn reg_index(operand: u8) -> usize {
    (operand & 0x07) as usize
}

/// What the fetch-execute loop does with the PC after a handler returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    /// Step past the instruction and its operands.
    Advance,
    /// The handler already set the PC.
    Jumped,
}

/// The LS-8 machine: 256 bytes of RAM, eight 8-bit registers, a program
/// counter and the `LGE` flags.
///
/// All address and register arithmetic wraps modulo 256, so the PC and SP
/// can never leave the address space.
pub struct Machine {
    ram: [u8; MEMORY_SIZE],
    regs: [u8; NUM_REGS],
    pc: u8,
    flags: Flags,
    state: State,
    instructions_executed: u64,
}

impl Default for Machine {
    fn default() -> Self {
        let mut regs = [0; NUM_REGS];
        regs[SP] = SP_INIT;
        Self {
            ram: [0; MEMORY_SIZE],
            regs,
            pc: 0,
            flags: Flags::empty(),
            state: State::Running,
            instructions_executed: 0,
        }
    }
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore power-on state, clearing memory.
    pub fn reset(&mut self) {
        *self = Self::default();
        log::debug!("LS-8 reset");
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load_program(&mut self, program: &[u8]) {
        let len = if program.len() > MEMORY_SIZE {
            log::warn!(
                "Program is {} bytes, truncating to {} bytes",
                program.len(),
                MEMORY_SIZE
            );
            MEMORY_SIZE
        } else {
            program.len()
        };
        self.ram[..len].copy_from_slice(&program[..len]);
    }

    /// Execute instructions until the machine halts or faults.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), MachineError> {
        while self.step(out)? == State::Running {}
        out.flush().map_err(|e| self.fault(e.into()))?;
        log::info!(
            "LS-8 halted after {} instructions",
            self.instructions_executed
        );
        Ok(())
    }

    /// Run a single fetch-execute cycle.
    ///
    /// A halted machine is left untouched. On a fault the machine is halted
    /// before the error is returned.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<State, MachineError> {
        if self.is_halted() {
            return Ok(State::Halted);
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self.trace_line());
        }

        let pc = self.pc;
        let byte = self.ram_read(pc);
        let Some(opcode) = Opcode::from_byte(byte) else {
            log::error!(
                "LS-8 halted: illegal instruction 0x{byte:02X} at PC=0x{pc:02X} (regs={:02X?})",
                self.regs
            );
            return Err(self.fault(MachineError::IllegalInstruction { opcode: byte, pc }));
        };

        let flow = self.execute(opcode, out).map_err(|e| self.fault(e))?;
        if flow == Flow::Advance {
            self.pc = pc.wrapping_add(opcode.len());
        }
        self.instructions_executed += 1;

        Ok(self.state)
    }

    fn fault(&mut self, err: MachineError) -> MachineError {
        self.state = State::Halted;
        err
    }

    #[inline]
    pub fn ram_read(&self, addr: u8) -> u8 {
        self.ram[addr as usize]
    }

    #[inline]
    pub fn ram_write(&mut self, addr: u8, value: u8) {
        self.ram[addr as usize] = value;
    }

    /// Value of register `index`.
    ///
    /// Panics if `index >= NUM_REGS`.
    #[inline]
    pub fn reg(&self, index: usize) -> u8 {
        self.regs[index]
    }

    /// Panics if `index >= NUM_REGS`.
    #[inline]
    pub fn set_reg(&mut self, index: usize, value: u8) {
        self.regs[index] = value;
    }

    #[inline]
    pub fn registers(&self) -> &[u8; NUM_REGS] {
        &self.regs
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs[SP]
    }

    #[inline]
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Point the PC somewhere other than address 0 before running.
    #[inline]
    pub fn set_pc(&mut self, pc: u8) {
        self.pc = pc;
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn instructions_executed(&self) -> u64 {
        self.instructions_executed
    }
}
