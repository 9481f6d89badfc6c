//! Graph algorithms
mod construction;
pub use self::construction::*;
mod connectivity;
pub use self::connectivity::*;
