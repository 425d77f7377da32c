use super::dto::GenerateRecommendationRequest;

/// Template family for the generation prompt.
///
/// `"English"` selects the English template; every other label, including
/// unknown ones, uses the declared default (Chinese).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptLanguage {
    English,
    #[default]
    Chinese,
}

impl PromptLanguage {
    pub fn from_label(label: &str) -> Self {
        match label {
            "English" => PromptLanguage::English,
            _ => PromptLanguage::default(),
        }
    }
}

/// How long and how inventive the completion may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionProfile {
    /// A short spoken recommendation
    #[default]
    Recommendation,
    /// Structured book analysis returned as JSON
    Analysis,
}

impl CompletionProfile {
    pub fn max_tokens(&self) -> u32 {
        match self {
            CompletionProfile::Recommendation => 300,
            CompletionProfile::Analysis => 1200,
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            CompletionProfile::Recommendation => 0.7,
            CompletionProfile::Analysis => 0.3,
        }
    }
}

/// System role plus user instruction handed to the text generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub role: String,
    pub instruction: String,
    pub language: PromptLanguage,
    pub profile: CompletionProfile,
}

pub fn build_prompt(request: &GenerateRecommendationRequest) -> Prompt {
    let language = PromptLanguage::from_label(&request.language);
    let GenerateRecommendationRequest {
        book_title,
        recipient_name,
        relationship,
        recipient_interests,
        tone,
        ..
    } = request;

    let (role, instruction) = match language {
        PromptLanguage::English => (
            "You are an enthusiastic book lover who excels at personalized book recommendations.",
            format!(
                "Create a 1-minute personalized book recommendation for {recipient_name} (my {relationship}).\n\
                 \n\
                 Book: {book_title}\n\
                 Recipient's interests: {recipient_interests}\n\
                 Tone: {tone}\n\
                 \n\
                 Requirements:\n\
                 1. Speak directly to {recipient_name}, use \"you\"\n\
                 2. Mention why this book is perfect for them\n\
                 3. Include 1-2 specific highlights or plot points\n\
                 4. Natural, conversational language like friends talking\n\
                 5. Keep it 30-50 words\n\
                 6. End with a call to action encouraging them to read it\n\
                 \n\
                 Generate the recommendation:"
            ),
        ),
        PromptLanguage::Chinese => (
            "你是一个热情的书友，擅长个性化推荐书籍。",
            format!(
                "为{recipient_name}（我的{relationship}）创建一个1分钟的个性化书籍推荐。\n\
                 \n\
                 书籍：{book_title}\n\
                 接收人兴趣：{recipient_interests}\n\
                 语调：{tone}\n\
                 \n\
                 要求：\n\
                 1. 直接对{recipient_name}说话，使用\"你\"\n\
                 2. 提及为什么这本书特别适合他/她\n\
                 3. 包含1-2个具体的吸引点或情节亮点\n\
                 4. 语言自然、口语化，像朋友间的推荐\n\
                 5. 长度控制在50-80字\n\
                 6. 结尾要有行动召唤，鼓励去读这本书\n\
                 \n\
                 请生成推荐文本："
            ),
        ),
    };

    Prompt {
        role: role.to_string(),
        instruction,
        language,
        profile: CompletionProfile::Recommendation,
    }
}
