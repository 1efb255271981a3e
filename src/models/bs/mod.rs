//! Black-Scholes model for European options: validated inputs, closed-form
//! prices and Greeks, and price curves over a range of underlying prices.

pub mod curve;
pub mod params;
pub mod pricing;

pub use curve::*;
pub use params::*;
pub use pricing::*;
