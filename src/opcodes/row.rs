use std::fmt;

use crate::constants::*;
use crate::error::GenError;

use super::*;

/// How the opcode comment at the start of each row is written.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HexStyle {
    /// `0x0`, `0xff`
    #[default]
    Bare,
    /// `0x00`, `0xff`
    ZeroPadded,
}

impl HexStyle {
    pub fn format(&self, opcode: u16) -> String {
        match self {
            HexStyle::Bare => format!("{:#x}", opcode),
            HexStyle::ZeroPadded => format!("{:#04x}", opcode),
        }
    }
}

/// One entry of the emulator's CB instruction table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CbRow {
    pub opcode: u16,
    pub mnemonic: Mnemonic,
    pub operand: Operand,
    pub cycles: u8,
    pub length: u8,
}

impl CbRow {
    pub fn new(opcode: u16) -> Result<CbRow, GenError> {
        let mnemonic = lookup_mnemonic(opcode)?;
        let operand = Operand::from_opcode(opcode);
        let cycles = if operand.is_indirect() {
            CYCLES_INDIRECT
        } else {
            CYCLES_REGISTER
        };

        Ok(CbRow {
            opcode,
            mnemonic,
            operand,
            cycles,
            length: CB_INSTRUCTION_LENGTH,
        })
    }

    /// e.g. `RLC_HL`
    pub fn label(&self) -> String {
        format!("{}_{}", self.mnemonic, self.operand)
    }

    pub fn render(&self, style: HexStyle) -> String {
        format!(
            "/*{}*/ Instruction{{encoding:{},mnemonic:\"{}\",cycles:{},length:{}}},",
            style.format(self.opcode),
            CB_ENCODING_TAG,
            self.label(),
            self.cycles,
            self.length
        )
    }
}

impl fmt::Display for CbRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(HexStyle::default()))
    }
}
