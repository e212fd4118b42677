//! Domain models for the stock inventory core

mod container;
mod prediction;
mod stock;
mod unit;

pub use container::*;
pub use prediction::*;
pub use stock::*;
pub use unit::*;
