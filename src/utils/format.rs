//! 展示格式相关的纯函数

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// 与常见 URL 编码一致，保留 unreserved 字符
const FILENAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NOTICE_PALETTE: [&str; 6] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33FF", "#33FFFF", "#FFFF33",
];

/// 列表日期：`05 Mar 2025`
pub fn display_date(value: &DateTime<Utc>) -> String {
    value.format("%d %b %Y").to_string()
}

/// 详情日期：`05 March, 2025`
pub fn long_date(value: &DateTime<Utc>) -> String {
    value.format("%d %B, %Y").to_string()
}

pub fn clock_time(value: &DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

/// 取存储路径的文件名部分并做百分号编码，可直接放入 Content-Disposition
pub fn encoded_basename(path: &str) -> String {
    let basename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    utf8_percent_encode(basename, FILENAME_SET).to_string()
}

/// 通知卡片背景色，按 ID 固定取色
pub fn notice_background_color(id: i64) -> &'static str {
    NOTICE_PALETTE[id.rem_euclid(NOTICE_PALETTE.len() as i64) as usize]
}

/// 无照片学生的占位图
pub fn student_fallback_image(id: i64) -> String {
    format!("/static/img/administration/{}.jpeg", id.rem_euclid(10) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_patterns() {
        let value = Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(display_date(&value), "05 Mar 2025");
        assert_eq!(long_date(&value), "05 March, 2025");
        assert_eq!(clock_time(&value), "14:07");
    }

    #[test]
    fn test_encoded_basename() {
        assert_eq!(encoded_basename("results/annual result.pdf"), "annual%20result.pdf");
        assert_eq!(encoded_basename("plain.pdf"), "plain.pdf");
        assert_eq!(
            encoded_basename("notices/নোটিশ.pdf"),
            "%E0%A6%A8%E0%A7%8B%E0%A6%9F%E0%A6%BF%E0%A6%B6.pdf"
        );
        assert_eq!(encoded_basename("books/a\"b.pdf"), "a%22b.pdf");
    }

    #[test]
    fn test_notice_palette_is_deterministic() {
        assert_eq!(notice_background_color(0), "#FF5733");
        assert_eq!(notice_background_color(7), "#33FF57");
        assert_eq!(notice_background_color(7), notice_background_color(13));
    }

    #[test]
    fn test_student_fallback_image() {
        assert_eq!(student_fallback_image(3), "/static/img/administration/4.jpeg");
        assert_eq!(student_fallback_image(20), "/static/img/administration/1.jpeg");
    }
}
