pub mod capture_logger;

pub use capture_logger::{captured, init_logger};
