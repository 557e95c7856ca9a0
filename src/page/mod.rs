pub mod conversion;
pub mod definition;
pub mod json;
pub mod role;
pub mod source;

pub use conversion::*;
pub use definition::*;
pub use role::*;
pub use source::*;
