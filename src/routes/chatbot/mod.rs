mod recommend;
mod types;
mod util;

pub use recommend::*;
pub use types::*;
pub use util::*;
