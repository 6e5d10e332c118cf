mod get_movie_info;
mod get_movie_tags;
mod types;
mod util;

pub use get_movie_info::*;
pub use get_movie_tags::*;
pub use types::*;
pub use util::*;
