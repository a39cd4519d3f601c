use std::ops::Range;

use crate::constants::OPCODES_PER_MNEMONIC;
use crate::error::GenError;

use super::Mnemonic;

/// Resolves the mnemonic owning `opcode`. The upper five bits select the
/// operation, so this is a plain index rather than a range scan.
pub fn lookup_mnemonic(opcode: u16) -> Result<Mnemonic, GenError> {
    Mnemonic::ALL
        .get((opcode / OPCODES_PER_MNEMONIC) as usize)
        .copied()
        .ok_or(GenError::LookupMiss { opcode })
}

/// The opcodes owned by `mnemonic`.
pub fn mnemonic_range(mnemonic: Mnemonic) -> Range<u16> {
    let start = mnemonic.index() as u16 * OPCODES_PER_MNEMONIC;
    start..start + OPCODES_PER_MNEMONIC
}
