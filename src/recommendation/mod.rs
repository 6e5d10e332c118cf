//! Rule-based recommendation over the movie catalog.
//!
//! A query is a set of predicates (runtime ceiling, adult content, genre
//! overlap). Every record that passes all of them is kept, and the survivors
//! are ranked by `vote_average`, highest first.

mod filter;
mod predicate;

pub use filter::*;
pub use predicate::*;
