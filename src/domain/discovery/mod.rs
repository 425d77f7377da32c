pub mod analysis;
pub mod dto;
pub mod error;
pub mod service;

pub use analysis::{analysis_id, build_analysis_prompt, parse_analysis, BookAnalysis};
pub use dto::{BookDiscoveryRequest, BookDiscoveryResponse, DEFAULT_USER_LEVEL};
pub use error::DiscoveryError;
pub use service::DiscoveryService;
