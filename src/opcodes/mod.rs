mod lookup;
mod mnemonic;
mod operand;
mod row;

pub use lookup::{lookup_mnemonic, mnemonic_range};
pub use mnemonic::Mnemonic;
pub use operand::Operand;
pub use row::{CbRow, HexStyle};
