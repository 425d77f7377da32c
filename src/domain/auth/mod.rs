pub mod dto;
pub mod error;
pub mod jwt;
pub mod pages;
pub mod password;
pub mod service;

pub use dto::{
    CheckEmailQuery, CheckEmailResponse, LoginRequest, MessageResponse, RegisterRequest,
    RegisterResponse, ResendVerificationQuery, TokenResponse, VerifyEmailQuery,
};
pub use error::AuthServiceError;
pub use jwt::{Claims, JwtManager};
pub use service::AuthService;
