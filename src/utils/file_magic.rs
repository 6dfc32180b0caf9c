/// 校验上传内容的文件头是否与扩展名一致
///
/// `extension` 可带或不带点号，大小写不敏感。只识别站点允许上传的格式，
/// 其他扩展名一律视为不匹配。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    match extension.as_str() {
        "png" => data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "jpg" | "jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        "gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        "webp" => data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP",
        "pdf" => data.starts_with(b"%PDF"),
        // OLE 复合文档
        "doc" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        // OOXML 为 ZIP 容器
        "docx" => data.starts_with(b"PK\x03\x04"),
        _ => false,
    }
}

/// 取文件名的扩展名（小写，不含点号）
pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_headers() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png, "png"));
        assert!(validate_magic_bytes(&png, ".PNG"));
        assert!(!validate_magic_bytes(&png, "jpg"));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg, "jpeg"));
    }

    #[test]
    fn test_document_headers() {
        assert!(validate_magic_bytes(b"%PDF-1.7\n", "pdf"));
        assert!(!validate_magic_bytes(b"<html>", "pdf"));
        assert!(validate_magic_bytes(b"PK\x03\x04rest", "docx"));
    }

    #[test]
    fn test_rejects_empty_and_unknown() {
        assert!(!validate_magic_bytes(&[], "pdf"));
        assert!(!validate_magic_bytes(b"MZ\x90\x00", "exe"));
        assert!(!validate_magic_bytes(b"hello", "txt"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("Result 2025.PDF"), Some("pdf".into()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".into()));
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("noext"), None);
    }
}
