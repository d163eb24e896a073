pub mod initialize;
pub mod loader;
pub mod pool;
pub mod queries;
