pub mod engine;
pub mod outcome;

pub use engine::compute;
pub use outcome::{CalculationResult, Reason, ReasonKind};
