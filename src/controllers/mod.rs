pub mod audio;
pub mod auth;
pub mod discovery;
pub mod gallery;
pub mod health;
pub mod recommendation;
pub mod share;
pub mod user;
