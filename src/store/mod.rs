pub mod accounts;

pub use accounts::{AccountStore, UserAccount};
