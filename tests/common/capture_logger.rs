use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::Mutex;

// Only summaries are kept, per-row debug lines would crowd them out.
const RING_BUFFER_SIZE: usize = 60;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger. Only the first call per test binary wins.
pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&CaptureLogger).map(|()| log::set_max_level(LevelFilter::Info))
}

pub fn captured() -> Vec<String> {
    LOG_BUFFER.lock().unwrap().iter().cloned().collect()
}
