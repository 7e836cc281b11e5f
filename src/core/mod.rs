pub mod calculator;
pub mod log;
pub mod report;
pub mod timer;
pub mod week;
