pub mod alert;
pub mod chat;
pub mod image;
pub mod orbital;
pub mod user;

pub use alert::*;
pub use chat::*;
pub use image::*;
pub use orbital::*;
pub use user::*;
