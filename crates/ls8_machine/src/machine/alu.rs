use std::cmp::Ordering;

use super::{reg_index, Flags, Machine};
use crate::{MachineError, Opcode};

impl Machine {
    /// Apply an ALU instruction to registers `reg_a` and `reg_b`, storing the
    /// result in `reg_a`.
    ///
    /// Register operands are masked to R0–R7. Arithmetic wraps modulo 256.
    pub(super) fn alu(&mut self, op: Opcode, reg_a: u8, reg_b: u8) -> Result<(), MachineError> {
        let ia = reg_index(reg_a);
        let a = self.regs[ia];
        let b = self.regs[reg_index(reg_b)];

        let result = match op {
            Opcode::Add => a.wrapping_add(b),
            Opcode::Sub => a.wrapping_sub(b),
            Opcode::Mul => a.wrapping_mul(b),
            Opcode::Div | Opcode::Mod => {
                if b == 0 {
                    log::error!(
                        "LS-8 halted: {} by zero at PC=0x{:02X} (regs={:02X?})",
                        op.mnemonic(),
                        self.pc,
                        self.regs
                    );
                    return Err(MachineError::DivisionByZero { pc: self.pc });
                }
                if op == Opcode::Div {
                    a / b
                } else {
                    a % b
                }
            }
            Opcode::Inc => a.wrapping_add(1),
            Opcode::Dec => a.wrapping_sub(1),
            Opcode::And => a & b,
            Opcode::Or => a | b,
            Opcode::Xor => a ^ b,
            Opcode::Not => !a,
            // Shifting by the register width or more clears every bit.
            Opcode::Shl => a.checked_shl(b as u32).unwrap_or(0),
            Opcode::Shr => a.checked_shr(b as u32).unwrap_or(0),
            Opcode::Cmp => {
                self.flags = match a.cmp(&b) {
                    Ordering::Less => Flags::LESS,
                    Ordering::Greater => Flags::GREATER,
                    Ordering::Equal => Flags::EQUAL,
                };
                return Ok(());
            }
            _ => return Err(MachineError::UnsupportedOperation { opcode: op.byte() }),
        };

        self.regs[ia] = result;
        Ok(())
    }
}
