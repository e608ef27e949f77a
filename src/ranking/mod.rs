pub mod aggregate;
pub mod format;
pub mod rank;

pub use aggregate::*;
pub use format::*;
pub use rank::*;
