// Constants for the CB-prefixed instruction set
pub const CB_OPCODE_COUNT: u16 = 256;
pub const OPCODES_PER_MNEMONIC: u16 = 8;

/// Prefix byte plus opcode byte.
pub const CB_INSTRUCTION_LENGTH: u8 = 2;

pub const CYCLES_REGISTER: u8 = 8;
pub const CYCLES_INDIRECT: u8 = 16;

/// Encoding tag the emulator's table uses for CB-prefixed rows.
pub const CB_ENCODING_TAG: &str = "Type::CB";
