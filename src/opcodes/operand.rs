use std::fmt;

/// Operand selected by the low three bits of a CB opcode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operand {
    B,
    C,
    D,
    E,
    H,
    L,
    HL, // (HL), the byte in memory pointed to by HL
    A,
}

impl Operand {
    /// Ordered by the hardware register-selection bits.
    pub const ALL: [Operand; 8] = [
        Operand::B,
        Operand::C,
        Operand::D,
        Operand::E,
        Operand::H,
        Operand::L,
        Operand::HL,
        Operand::A,
    ];

    pub fn from_opcode(opcode: u16) -> Operand {
        Operand::ALL[(opcode % 8) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operand::B => "B",
            Operand::C => "C",
            Operand::D => "D",
            Operand::E => "E",
            Operand::H => "H",
            Operand::L => "L",
            Operand::HL => "HL",
            Operand::A => "A",
        }
    }

    /// Memory operands take an extra two machine cycles to read and write back.
    pub fn is_indirect(&self) -> bool {
        self.name().len() == 2
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
