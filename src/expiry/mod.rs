pub mod error;
pub mod evaluator;
pub mod record;
