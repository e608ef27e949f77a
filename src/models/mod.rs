pub mod search;
pub mod tier;

pub use search::*;
pub use tier::*;
