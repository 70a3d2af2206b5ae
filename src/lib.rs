pub mod market;
pub mod portfolio;
pub mod session;
pub mod store;
pub mod tui;
