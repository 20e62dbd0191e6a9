//! Command implementations for connect-cli

pub mod simulate;
pub mod validate;

pub use simulate::run_simulate;
pub use validate::run_validate;
