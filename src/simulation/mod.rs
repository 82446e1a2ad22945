pub mod simulation;
pub use simulation::*;

pub mod tally;
pub use tally::*;
