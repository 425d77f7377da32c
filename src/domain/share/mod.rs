pub mod error;
pub mod model;
pub mod pages;
pub mod service;

pub use error::ShareError;
pub use model::{ShareRecord, ShareResponse, DEFAULT_SHARE_LANGUAGE};
pub use pages::render_share_page;
pub use service::ShareService;
