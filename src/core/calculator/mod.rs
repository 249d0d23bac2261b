pub mod expected;
pub mod intervals;
