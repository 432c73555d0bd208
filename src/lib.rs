pub mod errors;
pub mod net;

pub use net::*;
