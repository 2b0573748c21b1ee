pub mod overtime;

pub use overtime::OvertimeCalculation;
