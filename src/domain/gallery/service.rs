use super::catalog::{clip_cache_key, clip_file_key, ClipKind, SampleBook, SAMPLE_BOOKS};
use super::dto::{
    GalleryAudioResponse, GalleryBook, GalleryBookResponse, GalleryResponse, REGENERATION_URL,
};
use crate::domain::tts::{AudioReference, VoiceRouter};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::AudioCacheRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Files this small are failed writes, not playable audio.
const MIN_AUDIO_FILE_BYTES: u64 = 100;

const GALLERY_LANGUAGE: &str = "English";
const GALLERY_VOICE: &str = "en-US-JennyNeural";

pub struct GalleryService {
    voice_router: Arc<VoiceRouter>,
    audio_cache: Arc<dyn AudioCacheRepository>,
    public_base_url: String,
    generation: Mutex<()>,
}

impl GalleryService {
    pub fn new(
        voice_router: Arc<VoiceRouter>,
        audio_cache: Arc<dyn AudioCacheRepository>,
        public_base_url: String,
    ) -> Self {
        Self {
            voice_router,
            audio_cache,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            generation: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> GalleryResponse {
        let mut books = Vec::with_capacity(SAMPLE_BOOKS.len());
        for (index, book) in SAMPLE_BOOKS.iter().enumerate() {
            books.push(self.gallery_book(index + 1, book).await);
        }

        let cache_empty = self.audio_cache.is_empty().await;
        if cache_empty {
            tracing::info!("Gallery audio cache empty, advertising regeneration");
        }

        GalleryResponse {
            success: true,
            total: books.len(),
            books,
            audio_cache_empty: cache_empty.then_some(true),
            regeneration_url: cache_empty.then(|| REGENERATION_URL.to_string()),
        }
    }

    /// Books are numbered from 1 in catalog order.
    pub async fn detail(&self, book_id: i64) -> AppResult<GalleryBookResponse> {
        let book = usize::try_from(book_id)
            .ok()
            .filter(|id| *id >= 1)
            .and_then(|id| SAMPLE_BOOKS.get(id - 1).map(|book| (id, book)));

        match book {
            Some((id, book)) => Ok(GalleryBookResponse {
                success: true,
                book: self.gallery_book(id, book).await,
            }),
            None => Err(AppError::NotFound("Book not found".to_string())),
        }
    }

    /// Synthesize both clips for every gallery book and cache where they ended up.
    ///
    /// Concurrent calls run one after the other.
    pub async fn generate_audio(&self) -> AppResult<GalleryAudioResponse> {
        let _running = self.generation.lock().await;
        let start_time = std::time::Instant::now();

        let mut files = Vec::with_capacity(SAMPLE_BOOKS.len() * ClipKind::ALL.len());
        for book in SAMPLE_BOOKS.iter() {
            for kind in ClipKind::ALL {
                let audio = self
                    .voice_router
                    .synthesize(
                        kind.text(book),
                        &clip_file_key(kind, book.isbn),
                        GALLERY_LANGUAGE,
                        GALLERY_VOICE,
                    )
                    .await?;
                files.push(audio.public_url(&self.public_base_url));
                self.audio_cache
                    .insert(&clip_cache_key(kind, book.isbn), audio)
                    .await;
            }
        }

        tracing::info!(
            files = files.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Gallery audio generated"
        );

        Ok(GalleryAudioResponse {
            success: true,
            message: format!("Generated {} audio files for book gallery", files.len()),
            files,
        })
    }

    /// Cache the gallery clips already present in the audio directory.
    ///
    /// Returns how many were added.
    pub async fn warm_up_from_audio_dir(&self) -> usize {
        let mut cached = 0;
        for book in SAMPLE_BOOKS.iter() {
            for kind in ClipKind::ALL {
                let path = self.clip_path(kind, book);
                let playable = tokio::fs::metadata(&path)
                    .await
                    .map(|metadata| metadata.is_file() && metadata.len() > MIN_AUDIO_FILE_BYTES)
                    .unwrap_or(false);
                if !playable {
                    continue;
                }

                let key = clip_cache_key(kind, book.isbn);
                let added = self
                    .audio_cache
                    .insert_if_absent(&key, AudioReference::Local(path))
                    .await;
                if added {
                    cached += 1;
                }
            }
        }

        if cached == 0 {
            tracing::info!("No gallery audio on disk, clients will trigger regeneration");
        } else {
            tracing::info!(cached, "Gallery audio cache warmed up");
        }
        cached
    }

    fn clip_path(&self, kind: ClipKind, book: &SampleBook) -> PathBuf {
        self.voice_router
            .audio_dir()
            .join(format!("{}.mp3", clip_file_key(kind, book.isbn)))
    }

    /// Cached location first, otherwise where regeneration will write the clip.
    async fn clip_url(&self, kind: ClipKind, book: &SampleBook) -> String {
        match self.audio_cache.get(&clip_cache_key(kind, book.isbn)).await {
            Some(audio) => audio.public_url(&self.public_base_url),
            None => {
                tracing::debug!(isbn = book.isbn, clip = kind.as_str(), "Gallery clip not cached");
                let expected = AudioReference::Local(self.clip_path(kind, book));
                expected.public_url(&self.public_base_url)
            }
        }
    }

    async fn gallery_book(&self, id: usize, book: &SampleBook) -> GalleryBook {
        GalleryBook {
            id,
            title: book.title.to_string(),
            author: book.author.to_string(),
            isbn: book.isbn.to_string(),
            cover_url: book.cover_url(),
            cefr_level: book.cefr_level.to_string(),
            estimated_vocabulary: book.estimated_vocabulary,
            formal_models: book.formal_models.iter().map(|m| m.to_string()).collect(),
            sample_paragraph: book.sample_paragraph.to_string(),
            sample_audio_path: self.clip_url(ClipKind::Sample, book).await,
            book_talk_text: book.book_talk_text.to_string(),
            book_talk_audio_path: self.clip_url(ClipKind::Talk, book).await,
            genre: book.genre.to_string(),
            publication_year: book.publication_year,
            page_count: book.page_count,
            goodreads_rating: book.goodreads_rating,
        }
    }
}
