pub mod cards;
pub mod evaluation;
pub mod simulation;

pub type Probability = f64;
