pub mod traits;
pub mod process;
pub mod system;
pub mod managers;

pub use traits::*;
pub use managers::{registry, Clipman, Clipster, CopyQ, GPaste};

pub type DefaultClipboard = system::SystemClipboard;
