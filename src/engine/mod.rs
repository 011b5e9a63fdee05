//! Question-generation core: shuffling, predicates and candidate selection.

pub mod predicate;
pub mod selector;
pub mod shuffle;

pub use predicate::{Always, Compatibility, Eligibility};
pub use selector::{Selection, select};
pub use shuffle::shuffled;
