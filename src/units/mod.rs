mod connection;
mod unit;

pub use connection::*;
pub use unit::*;
