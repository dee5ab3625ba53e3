pub mod chain;
pub mod icon;

pub use chain::*;
pub use icon::*;
