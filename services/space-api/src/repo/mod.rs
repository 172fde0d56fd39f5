pub mod user_repo;

pub use user_repo::{InMemoryUserStore, StoreError, UserStore};
