pub mod advice;
pub mod condition;
pub mod errors;
pub mod prediction;
