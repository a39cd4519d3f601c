use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GenError {
    Io(io::Error),
    LookupMiss { opcode: u16 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io(err) => write!(f, "I/O error: {}", err),
            GenError::LookupMiss { opcode } => {
                write!(f, "no CB mnemonic covers opcode {:#x}", opcode)
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(err) => Some(err),
            GenError::LookupMiss { .. } => None,
        }
    }
}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        GenError::Io(err)
    }
}
