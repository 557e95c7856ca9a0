pub mod artifact;
pub mod element;
pub mod process;

pub use element::*;
pub use process::*;
