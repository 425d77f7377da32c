pub mod catalog;
pub mod dto;
pub mod service;

pub use catalog::{clip_cache_key, clip_file_key, ClipKind, SampleBook, SAMPLE_BOOKS};
pub use dto::{GalleryAudioResponse, GalleryBook, GalleryBookResponse, GalleryResponse};
pub use service::GalleryService;
