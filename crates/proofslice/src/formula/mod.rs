//! Formula rewriting: canonical renaming and subterm abstraction.

pub mod abstraction;
pub mod normalize;


pub use abstraction::{abstract_repeated_term, ABSTRACTION_VARIABLE};
pub use normalize::{normalize_variables, normalize_variables_with_y, strip_leading_quantifiers};
