use std::io::Write;

use super::{reg_index, Flags, Flow, Machine, State};
use crate::{MachineError, Opcode, SP};

impl Machine {
    #[inline]
    fn operand_a(&self) -> u8 {
        self.ram_read(self.pc.wrapping_add(1))
    }

    #[inline]
    fn operand_b(&self) -> u8 {
        self.ram_read(self.pc.wrapping_add(2))
    }

    /// Value of the register named by the first operand.
    #[inline]
    fn reg_a(&self) -> u8 {
        self.regs[reg_index(self.operand_a())]
    }

    pub(super) fn execute<W: Write>(
        &mut self,
        opcode: Opcode,
        out: &mut W,
    ) -> Result<Flow, MachineError> {
        if opcode.is_alu() {
            let a = self.operand_a();
            // Single-operand ALU instructions use the same register for both
            // sides.
            let b = if opcode.operand_count() == 2 {
                self.operand_b()
            } else {
                a
            };
            self.alu(opcode, a, b)?;
            return Ok(Flow::Advance);
        }

        let flow = match opcode {
            Opcode::Nop => Flow::Advance,
            Opcode::Hlt => {
                self.state = State::Halted;
                Flow::Advance
            }

            Opcode::Ldi => {
                let value = self.operand_b();
                self.regs[reg_index(self.operand_a())] = value;
                Flow::Advance
            }
            Opcode::Ld => {
                let addr = self.regs[reg_index(self.operand_b())];
                self.regs[reg_index(self.operand_a())] = self.ram_read(addr);
                Flow::Advance
            }
            Opcode::St => {
                let addr = self.reg_a();
                let value = self.regs[reg_index(self.operand_b())];
                self.ram_write(addr, value);
                Flow::Advance
            }

            Opcode::Prn => {
                writeln!(out, "{}", self.reg_a())?;
                Flow::Advance
            }
            Opcode::Pra => {
                write!(out, "{}", char::from(self.reg_a()))?;
                Flow::Advance
            }

            Opcode::Push => {
                self.push(self.reg_a());
                Flow::Advance
            }
            Opcode::Pop => {
                let value = self.pop();
                self.regs[reg_index(self.operand_a())] = value;
                Flow::Advance
            }

            Opcode::Call => {
                let ret = self.pc.wrapping_add(Opcode::Call.len());
                let target = self.reg_a();
                self.push(ret);
                self.pc = target;
                Flow::Jumped
            }
            Opcode::Ret => {
                self.pc = self.pop();
                Flow::Jumped
            }

            Opcode::Jmp => self.jump_if(true),
            Opcode::Jeq => self.jump_if(self.flags.contains(Flags::EQUAL)),
            Opcode::Jne => self.jump_if(!self.flags.contains(Flags::EQUAL)),
            Opcode::Jgt => self.jump_if(self.flags.contains(Flags::GREATER)),
            Opcode::Jlt => self.jump_if(self.flags.contains(Flags::LESS)),
            Opcode::Jge => self.jump_if(self.flags.intersects(Flags::GREATER | Flags::EQUAL)),
            Opcode::Jle => self.jump_if(self.flags.intersects(Flags::LESS | Flags::EQUAL)),

            // Interrupts are not modelled; both behave as NOP.
            Opcode::Int | Opcode::Iret => Flow::Advance,

            _ => return Err(MachineError::UnsupportedOperation { opcode: opcode.byte() }),
        };

        Ok(flow)
    }

    fn jump_if(&mut self, condition: bool) -> Flow {
        if condition {
            self.pc = self.reg_a();
            Flow::Jumped
        } else {
            Flow::Advance
        }
    }

    pub(super) fn push(&mut self, value: u8) {
        let sp = self.regs[SP].wrapping_sub(1);
        self.regs[SP] = sp;
        self.ram_write(sp, value);
    }

    pub(super) fn pop(&mut self) -> u8 {
        let sp = self.regs[SP];
        let value = self.ram_read(sp);
        self.regs[SP] = sp.wrapping_add(1);
        value
    }
}
