pub mod auth;
pub mod chatbot;
pub mod hello_world;
pub mod movies;

pub use auth::*;
pub use chatbot::*;
pub use hello_world::*;
pub use movies::*;
