use super::ShareRecord;
use crate::domain::tts::VoiceLanguage;

const RETRO_TERMINAL_CSS: &str = r#"
        @import url('https://fonts.googleapis.com/css2?family=VT323&display=swap');
        * { margin: 0; padding: 0; box-sizing: border-box; }
        :root {
            --primary-green: #00ff00; --dark-green: #008000; --bg-black: #000000;
            --bg-dark: #111111; --white: #ffffff; --gray: #333333; --light-gray: #666666;
        }
        body { font-family: 'VT323', 'Courier New', monospace; background: var(--bg-black);
            color: var(--primary-green); line-height: 1.4; font-size: 18px; cursor: crosshair; min-height: 100vh;
            animation: flicker 3s infinite; }
        body::before { content: ""; position: fixed; top: 0; left: 0; width: 100%; height: 100%;
            background: linear-gradient(transparent 50%, rgba(0, 255, 0, 0.03) 50%);
            background-size: 100% 4px; pointer-events: none; z-index: 9999; }
        @keyframes flicker { 0%, 100% { opacity: 1; } 98% { opacity: 0.98; } 99% { opacity: 1; } }
        .main-content { margin-top: 60px; padding: 40px 20px; display: flex; justify-content: center;
            align-items: center; min-height: calc(100vh - 60px); }
        .share-container { max-width: 600px; width: 100%; border: 3px solid var(--primary-green);
            background: var(--bg-dark); padding: 40px; text-align: center; }
        .share-header { font-size: 2rem; text-transform: uppercase; letter-spacing: 2px;
            margin-bottom: 30px; text-shadow: 2px 2px 0px var(--dark-green); }
        .share-message { font-size: 1.2rem; margin-bottom: 30px; color: var(--white); line-height: 1.6; }
        .audio-container { margin: 30px 0; padding: 20px; border: 2px solid var(--light-gray);
            background: var(--bg-black); }
        .audio-label { margin-bottom: 10px; text-transform: uppercase; }
        .audio-player { width: 100%; background: var(--bg-black); border: 2px solid var(--primary-green);
            margin-top: 10px; }
        .pixel-btn { background: var(--bg-black); color: var(--primary-green);
            border: 3px solid var(--primary-green); padding: 12px 24px; font-family: 'VT323', monospace;
            font-size: 1.2rem; text-transform: uppercase; cursor: pointer; transition: all 0.2s;
            text-decoration: none; display: inline-block; margin-top: 20px;
            box-shadow: 4px 4px 0px var(--dark-green); }
        .pixel-btn:hover { background: var(--primary-green); color: var(--bg-black);
            transform: translate(2px, 2px); box-shadow: 2px 2px 0px var(--dark-green); }
"#;

struct PageText {
    lang: &'static str,
    title: &'static str,
    header: &'static str,
    message: &'static str,
    audio_label: &'static str,
    unsupported: &'static str,
    call_to_action: &'static str,
}

const CHINESE: PageText = PageText {
    lang: "zh",
    title: "SHH-ELF :: 个性化书籍推荐分享",
    header: "📚 书籍推荐",
    message: "有人通过 SHH-ELF 与你分享了一个个性化书籍推荐！",
    audio_label: "🎧 语音推荐：",
    unsupported: "你的浏览器不支持音频播放。",
    call_to_action: "创建你的推荐",
};

const ENGLISH: PageText = PageText {
    lang: "en",
    title: "SHH-ELF :: Shared Book Recommendation",
    header: "📚 Book Recommendation",
    message: "Someone has shared a personalized book recommendation with you through SHH-ELF!",
    audio_label: "🎧 Audio Recommendation:",
    unsupported: "Your browser does not support audio playback.",
    call_to_action: "Create Your Own Recommendation",
};

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the share page in the artifact's language.
pub fn render_share_page(
    record: &ShareRecord,
    public_base_url: &str,
    frontend_url: &str,
) -> String {
    let text = match VoiceLanguage::from_label(&record.language) {
        VoiceLanguage::Local => &CHINESE,
        VoiceLanguage::NonLocal => &ENGLISH,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{message}">
    <style>{css}</style>
</head>
<body>
    <div class="main-content">
        <div class="share-container">
            <div class="share-header">{header}</div>
            <div class="share-message">{message}</div>
            <div class="audio-container">
                <div class="audio-label">{audio_label}</div>
                <audio controls class="audio-player">
                    <source src="{audio_url}" type="audio/mpeg">
                    {unsupported}
                </audio>
            </div>
            <div style="margin-top: 30px;">
                <a href="{frontend_url}" class="pixel-btn">{call_to_action}</a>
            </div>
        </div>
    </div>
</body>
</html>"#,
        lang = text.lang,
        title = text.title,
        message = text.message,
        css = RETRO_TERMINAL_CSS,
        header = text.header,
        audio_label = text.audio_label,
        audio_url = escape_attr(&record.audio.public_url(public_base_url)),
        unsupported = text.unsupported,
        frontend_url = escape_attr(frontend_url),
        call_to_action = text.call_to_action,
    )
}
