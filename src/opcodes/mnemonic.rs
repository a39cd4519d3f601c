use std::fmt;
use std::str::FromStr;

/// CB-prefixed operations. The bit operations carry their bit index in the
/// name, so each variant owns exactly one row of eight opcodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mnemonic {
    RLC,
    RRC,
    RL,
    RR,
    SLA,
    SRA,
    SWAP,
    SRL,
    BIT0,
    BIT1,
    BIT2,
    BIT3,
    BIT4,
    BIT5,
    BIT6,
    BIT7,
    RES0,
    RES1,
    RES2,
    RES3,
    RES4,
    RES5,
    RES6,
    RES7,
    SET0,
    SET1,
    SET2,
    SET3,
    SET4,
    SET5,
    SET6,
    SET7,
}

impl Mnemonic {
    /// Ordered by the upper five bits of the opcode.
    pub const ALL: [Mnemonic; 32] = {
        use Mnemonic::*;
        [
            RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL,
            BIT0, BIT1, BIT2, BIT3, BIT4, BIT5, BIT6, BIT7,
            RES0, RES1, RES2, RES3, RES4, RES5, RES6, RES7,
            SET0, SET1, SET2, SET3, SET4, SET5, SET6, SET7,
        ]
    };

    /// Position in `ALL`, which is also `opcode / 8` for every opcode it covers.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Mnemonic {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::ALL
            .iter()
            .copied()
            .find(|m| format!("{:?}", m) == s)
            .ok_or("unknown mnemonic")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
