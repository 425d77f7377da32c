pub mod dto;
pub mod model;
pub mod service;

pub use dto::{RecommendationHistoryItem, UserResponse};
pub use model::{NewUser, User};
pub use service::UserService;
