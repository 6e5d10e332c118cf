mod loader;
mod lookup;
mod types;

pub use loader::*;
pub use lookup::*;
pub use types::*;
