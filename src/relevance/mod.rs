pub mod scorer;
pub mod sentences;
pub mod stopwords;

pub use scorer::*;
pub use sentences::*;
pub use stopwords::*;
