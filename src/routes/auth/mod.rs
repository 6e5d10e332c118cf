mod login;
mod logout;
mod util;

pub use login::*;
pub use logout::*;
pub use util::*;
