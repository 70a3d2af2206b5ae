pub mod runtime;
pub mod sim;
pub mod types;
