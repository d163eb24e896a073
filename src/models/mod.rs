pub mod breakdown;
pub mod direction;
pub mod guardia;
pub mod stats;
