use md5::{Digest, Md5};

const KEY_LEN: usize = 8;
const FILENAME_PREFIX: &str = "rec_";

/// First 8 lowercase hex characters of MD5(book_title ‖ recipient_name ‖ text).
///
/// Identical triples produce identical keys; existing share links depend on
/// this exact derivation.
pub fn content_key(book_title: &str, recipient_name: &str, generated_text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(book_title.as_bytes());
    hasher.update(recipient_name.as_bytes());
    hasher.update(generated_text.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..KEY_LEN].to_string()
}

/// Storage name for an artifact: `rec_<key>`
pub fn filename_key(content_key: &str) -> String {
    format!("{}{}", FILENAME_PREFIX, content_key)
}

/// Recover the content key from a `rec_<key>.mp3` file name.
pub fn key_from_file_name(file_name: &str) -> Option<&str> {
    let key = file_name
        .strip_prefix(FILENAME_PREFIX)?
        .strip_suffix(".mp3")?;
    is_content_key(key).then_some(key)
}

pub fn is_content_key(value: &str) -> bool {
    value.len() == KEY_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
