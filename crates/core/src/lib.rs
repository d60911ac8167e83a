pub mod frame;
pub mod io;
pub mod config;
pub mod error;

pub use frame::*;
pub use io::*;
pub use config::*;
pub use error::*;
