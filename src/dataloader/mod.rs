pub mod instance;
pub mod simple;

pub use instance::*;
pub use simple::*;
