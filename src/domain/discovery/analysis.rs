use super::dto::BookDiscoveryRequest;
use crate::domain::recommendation::{CompletionProfile, Prompt, PromptLanguage};
use md5::{Digest, Md5};
use serde::Deserialize;

const ANALYSIS_ID_LEN: usize = 12;
const FALLBACK_VOCABULARY: u32 = 6000;

/// What the text generator is asked to return for a book
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookAnalysis {
    pub first_paragraph: String,
    pub cefr_level: String,
    pub estimated_vocabulary: u32,
    pub formal_models: Vec<String>,
    pub book_talk: String,
}

/// First 12 hex characters of MD5("{title}_{author}_{level}")
pub fn analysis_id(request: &BookDiscoveryRequest) -> String {
    let digest = Md5::digest(
        format!(
            "{}_{}_{}",
            request.book_title, request.author, request.user_level
        )
        .as_bytes(),
    );
    format!("{:x}", digest)[..ANALYSIS_ID_LEN].to_string()
}

pub fn build_analysis_prompt(request: &BookDiscoveryRequest) -> Prompt {
    let BookDiscoveryRequest {
        book_title,
        author,
        user_level,
    } = request;

    let instruction = format!(
        "Analyze the book \"{book_title}\" by {author} for English learners at {user_level} level. \
         Provide the following information in English:\n\
         \n\
         1. Find or create the actual first paragraph of this book (approximately 150-200 words)\n\
         2. Assess CEFR difficulty level (A2/B1/B2/C1/C2)\n\
         3. Estimate required vocabulary size (3000-10000)\n\
         4. Identify 2-3 formal models (e.g., rational thinking, form-giving, illusion vs reality, \
         social critique, etc.)\n\
         5. Write an engaging book talk recommendation (100-150 words, explaining why this book \
         is worth reading)\n\
         \n\
         Return in JSON format in English:\n\
         {{\n\
         \x20   \"first_paragraph\": \"The actual first paragraph text...\",\n\
         \x20   \"cefr_level\": \"B2\",\n\
         \x20   \"estimated_vocabulary\": 6000,\n\
         \x20   \"formal_models\": [\"model1\", \"model2\", \"model3\"],\n\
         \x20   \"book_talk\": \"Book recommendation text in English...\"\n\
         }}"
    );

    Prompt {
        role: "You are a literature tutor who helps Chinese speakers choose English books. \
               Reply with JSON only."
            .to_string(),
        instruction,
        language: PromptLanguage::English,
        profile: CompletionProfile::Analysis,
    }
}

/// Pull the JSON object out of a completion, tolerating prose or code fences
/// around it. Anything unparseable becomes a placeholder analysis.
pub fn parse_analysis(completion: &str, request: &BookDiscoveryRequest) -> BookAnalysis {
    let parsed = match (completion.find('{'), completion.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str::<BookAnalysis>(&completion[start..=end])
                .map_err(|e| e.to_string())
        }
        _ => Err("no JSON object in completion".to_string()),
    };

    match parsed {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(
                book_title = %request.book_title,
                error = %e,
                "Book analysis unreadable, using placeholder"
            );
            placeholder_analysis(request)
        }
    }
}

fn placeholder_analysis(request: &BookDiscoveryRequest) -> BookAnalysis {
    let BookDiscoveryRequest {
        book_title,
        author,
        user_level,
    } = request;

    BookAnalysis {
        first_paragraph: format!(
            "Sorry, could not retrieve the first paragraph of {book_title} by {author}. \
             This is a placeholder text for analysis purposes."
        ),
        cefr_level: user_level.clone(),
        estimated_vocabulary: FALLBACK_VOCABULARY,
        formal_models: vec![
            "literary analysis".to_string(),
            "narrative structure".to_string(),
            "character development".to_string(),
        ],
        book_talk: format!(
            "{book_title} by {author} is a compelling work that offers rich opportunities \
             for language learning and literary appreciation."
        ),
    }
}
