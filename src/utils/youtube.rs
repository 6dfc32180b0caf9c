//! YouTube 视频 ID 提取

use once_cell::sync::Lazy;
use regex::Regex;

// 按顺序尝试，取第一个匹配的 11 位 ID
static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})",
        r"youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid youtube url regex"))
    .collect()
});

static BARE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid youtube id regex"));

/// 从链接中提取视频 ID
///
/// 依次匹配 `watch?v=`、`youtu.be/`、`embed/` 形式；都不匹配时，
/// 若输入本身就是 11 位 URL 安全字符则原样返回，否则返回空串（提取失败）。
pub fn extract_youtube_id(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    for pattern in URL_PATTERNS.iter() {
        if let Some(id) = pattern.captures(url).and_then(|caps| caps.get(1)) {
            return id.as_str().to_string();
        }
    }

    if BARE_ID.is_match(url) {
        return url.to_string();
    }

    String::new()
}

/// 由 ID 合成标准观看链接
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

pub fn embed_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://www.youtube.com/embed/{id}?rel=0&modestbranding=1")
}

pub fn thumbnail_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")
}
