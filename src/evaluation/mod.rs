//! Independent route and vehicle checks.

mod evaluator;

pub use evaluator::{RouteEvaluator, Violation, ViolationType};
