pub mod chat_service;
pub mod image_service;
pub mod orbital_generator;
pub mod registration_service;

pub use chat_service::ChatService;
pub use image_service::ImageService;
pub use orbital_generator::{debris_feed, generate_objects};
pub use registration_service::RegistrationService;
