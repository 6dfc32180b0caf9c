use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid slug separator regex"));

/// 由名称生成 slug
///
/// 转小写后只保留 ASCII 字母数字、下划线、空白与连字符，
/// 连续的空白/连字符合并为一个连字符，并去掉首尾的连字符与下划线。
/// 非 ASCII 名称（如孟加拉语）可能得到空串，由调用方视为校验失败。
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    SEPARATOR_RUN
        .replace_all(kept.trim(), "-")
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}
