pub mod auth;
pub mod discovery;
pub mod gallery;
pub mod recommendation;
pub mod share;
pub mod tts;
pub mod user;
