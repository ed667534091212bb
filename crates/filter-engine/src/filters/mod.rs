//! Filter implementations for the three criteria dimensions.
//!
//! Each one can be composed into a FilterPipeline on its own.

pub mod connector_type;
pub mod gender;
pub mod search;

// Re-export for convenience
pub use connector_type::TypeFilter;
pub use gender::GenderFilter;
pub use search::SearchFilter;
