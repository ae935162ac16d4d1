pub mod engine;
pub mod log;
pub mod model;
pub mod observability;
pub mod wire;
