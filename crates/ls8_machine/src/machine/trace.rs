use std::fmt::Write;

use super::Machine;

impl Machine {
    /// Render the current CPU state as a single line:
    ///
    /// ```text
    /// TRACE: PC | PC+0 PC+1 PC+2 | R0 R1 R2 R3 R4 R5 R6 R7
    /// ```
    ///
    /// All values are two-digit hexadecimal.
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.ram_read(self.pc),
            self.ram_read(self.pc.wrapping_add(1)),
            self.ram_read(self.pc.wrapping_add(2)),
        );
        for reg in self.regs {
            // Writing into a String cannot fail.
            let _ = write!(line, " {reg:02X}");
        }
        line
    }
}
