/// LS-8 instruction opcodes.
///
/// Each byte is laid out as `AABCDDDD`:
///
/// - `AA`:   number of operand bytes that follow (0–2)
/// - `B`:    1 for instructions handled by the ALU
/// - `C`:    1 if the instruction sets the PC itself
/// - `DDDD`: instruction identifier
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Opcode {
    // ALU
    Add = 0b1010_0000,
    Sub = 0b1010_0001,
    Mul = 0b1010_0010,
    Div = 0b1010_0011,
    Mod = 0b1010_0100,
    Inc = 0b0110_0101,
    Dec = 0b0110_0110,
    Cmp = 0b1010_0111,
    And = 0b1010_1000,
    Not = 0b0110_1001,
    Or = 0b1010_1010,
    Xor = 0b1010_1011,
    Shl = 0b1010_1100,
    Shr = 0b1010_1101,

    // PC mutators
    Call = 0b0101_0000,
    Ret = 0b0001_0001,
    Int = 0b0101_0010,
    Iret = 0b0001_0011,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    Jgt = 0b0101_0111,
    Jlt = 0b0101_1000,
    Jle = 0b0101_1001,
    Jge = 0b0101_1010,

    // Other
    Nop = 0b0000_0000,
    Hlt = 0b0000_0001,
    Ldi = 0b1000_0010,
    Ld = 0b1000_0011,
    St = 0b1000_0100,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Pra = 0b0100_1000,
}

impl Opcode {
    /// Decode a raw instruction byte. Returns `None` for bytes that are not
    /// part of the instruction set.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let op = match byte {
            0xA0 => Opcode::Add,
            0xA1 => Opcode::Sub,
            0xA2 => Opcode::Mul,
            0xA3 => Opcode::Div,
            0xA4 => Opcode::Mod,
            0x65 => Opcode::Inc,
            0x66 => Opcode::Dec,
            0xA7 => Opcode::Cmp,
            0xA8 => Opcode::And,
            0x69 => Opcode::Not,
            0xAA => Opcode::Or,
            0xAB => Opcode::Xor,
            0xAC => Opcode::Shl,
            0xAD => Opcode::Shr,

            0x50 => Opcode::Call,
            0x11 => Opcode::Ret,
            0x52 => Opcode::Int,
            0x13 => Opcode::Iret,
            0x54 => Opcode::Jmp,
            0x55 => Opcode::Jeq,
            0x56 => Opcode::Jne,
            0x57 => Opcode::Jgt,
            0x58 => Opcode::Jlt,
            0x59 => Opcode::Jle,
            0x5A => Opcode::Jge,

            0x00 => Opcode::Nop,
            0x01 => Opcode::Hlt,
            0x82 => Opcode::Ldi,
            0x83 => Opcode::Ld,
            0x84 => Opcode::St,
            0x45 => Opcode::Push,
            0x46 => Opcode::Pop,
            0x47 => Opcode::Prn,
            0x48 => Opcode::Pra,

            _ => return None,
        };
        Some(op)
    }

    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode.
    #[inline]
    pub const fn operand_count(self) -> u8 {
        self.byte() >> 6
    }

    /// Total instruction length in bytes, opcode included.
    #[inline]
    pub const fn len(self) -> u8 {
        self.operand_count() + 1
    }

    #[inline]
    pub const fn is_alu(self) -> bool {
        self.byte() & 0b0010_0000 != 0
    }

    /// Whether the instruction is responsible for setting the PC.
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self.byte() & 0b0001_0000 != 0
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Not => "NOT",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Int => "INT",
            Opcode::Iret => "IRET",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jlt => "JLT",
            Opcode::Jle => "JLE",
            Opcode::Jge => "JGE",
            Opcode::Nop => "NOP",
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Pra => "PRA",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::Opcode;

    #[test]
    fn decode_covers_exactly_the_instruction_set() {
        let decoded = (0..=u8::MAX)
            .filter_map(Opcode::from_byte)
            .collect::<Vec<_>>();
        assert_eq!(decoded.len(), 34);
        for op in decoded {
            assert_eq!(Opcode::from_byte(op.byte()), Some(op));
        }
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        assert_eq!(Opcode::try_from(0xFF), Err(0xFF));
        assert_eq!(Opcode::try_from(0x02), Err(0x02));
    }

    #[test]
    fn layout_bits() {
        assert_eq!(Opcode::Ldi.operand_count(), 2);
        assert_eq!(Opcode::Prn.operand_count(), 1);
        assert_eq!(Opcode::Hlt.operand_count(), 0);
        assert_eq!(Opcode::Ldi.len(), 3);

        assert!(Opcode::Add.is_alu());
        assert!(Opcode::Not.is_alu());
        assert!(!Opcode::Push.is_alu());

        assert!(Opcode::Call.sets_pc());
        assert!(Opcode::Ret.sets_pc());
        assert!(Opcode::Jge.sets_pc());
        assert!(!Opcode::Ldi.sets_pc());
    }

    #[test]
    fn mnemonics() {
        assert_eq!(Opcode::Mul.mnemonic(), "MUL");
        assert_eq!(Opcode::Iret.mnemonic(), "IRET");
    }
}
