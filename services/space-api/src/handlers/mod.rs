pub mod alerts_handler;
pub mod auth_handler;
pub mod chat_handler;
pub mod debris_handler;
pub mod health;
pub mod image_handler;

pub use alerts_handler::*;
pub use auth_handler::*;
pub use chat_handler::*;
pub use debris_handler::*;
pub use health::*;
pub use image_handler::*;
