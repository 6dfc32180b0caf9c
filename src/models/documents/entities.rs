use serde::{Deserialize, Serialize};

/// 文档类记录的种类
///
/// 六种文档共享同一套过滤、序列化与下载逻辑，按种类区分存储表、
/// 下载地址与允许的文件格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Notice,
    Routine,
    Book,
    Syllabus,
    Result,
    Admission,
}

const RICH_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];
const PDF_ONLY: &[&str] = &["pdf"];

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Notice,
        DocumentKind::Routine,
        DocumentKind::Book,
        DocumentKind::Syllabus,
        DocumentKind::Result,
        DocumentKind::Admission,
    ];

    /// 单数形式，用于下载路径 `/download-<slug>/<id>/`
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::Notice => "notice",
            DocumentKind::Routine => "routine",
            DocumentKind::Book => "book",
            DocumentKind::Syllabus => "syllabus",
            DocumentKind::Result => "result",
            DocumentKind::Admission => "admission",
        }
    }

    /// 公开列表接口 JSON 中的集合键名，同时作为上传目录
    pub fn collection(&self) -> &'static str {
        match self {
            DocumentKind::Notice => "notices",
            DocumentKind::Routine => "routines",
            DocumentKind::Book => "books",
            DocumentKind::Syllabus => "syllabus",
            DocumentKind::Result => "results",
            DocumentKind::Admission => "admissions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Notice => "Notice",
            DocumentKind::Routine => "Routine",
            DocumentKind::Book => "Book",
            DocumentKind::Syllabus => "Syllabus",
            DocumentKind::Result => "Result",
            DocumentKind::Admission => "Admission",
        }
    }

    pub fn download_url(&self, id: i64) -> String {
        format!("/download-{}/{}/", self.slug(), id)
    }

    /// 允许的文件扩展名（小写，不含点号）
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Result | DocumentKind::Admission => PDF_ONLY,
            _ => RICH_EXTENSIONS,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    /// 同时接受单数 slug 与集合名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s || kind.collection() == s)
            .ok_or_else(|| format!("Unknown document kind: {s}"))
    }
}

impl<'de> Deserialize<'de> for DocumentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 课表类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineCategory {
    Class,
    Exam,
}

impl RoutineCategory {
    pub const CLASS: &'static str = "class";
    pub const EXAM: &'static str = "exam";

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineCategory::Class => Self::CLASS,
            RoutineCategory::Exam => Self::EXAM,
        }
    }
}

impl std::str::FromStr for RoutineCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RoutineCategory::CLASS => Ok(RoutineCategory::Class),
            RoutineCategory::EXAM => Ok(RoutineCategory::Exam),
            _ => Err(format!("Invalid routine category: '{s}'. Expected class or exam")),
        }
    }
}

impl<'de> Deserialize<'de> for RoutineCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 各文档种类特有的字段
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DocumentDetails {
    Notice {
        short_description: String,
        notice_type_id: i64,
    },
    Routine {
        category: RoutineCategory,
        routine_type_id: Option<i64>,
    },
    Plain,
}

// 文档实体
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: i64,
    pub kind: DocumentKind,
    pub title: String,
    // 文件在存储中的相对路径
    pub file: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub details: DocumentDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 带关联名称的文档，供序列化使用
#[derive(Debug, Clone)]
pub struct DocumentView {
    pub document: Document,
    pub class_name: Option<String>,
    pub department_name: Option<String>,
    // 通知类型或课表类型名称
    pub type_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_paths() {
        assert_eq!(DocumentKind::Book.download_url(12), "/download-book/12/");
        assert_eq!(DocumentKind::Syllabus.collection(), "syllabus");
        assert_eq!(DocumentKind::Admission.collection(), "admissions");
    }

    #[test]
    fn test_kind_parses_slug_and_collection() {
        assert_eq!("result".parse::<DocumentKind>(), Ok(DocumentKind::Result));
        assert_eq!("results".parse::<DocumentKind>(), Ok(DocumentKind::Result));
        assert!("homework".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_allowed_extensions() {
        assert_eq!(DocumentKind::Result.allowed_extensions(), &["pdf"]);
        assert!(DocumentKind::Notice.allowed_extensions().contains(&"docx"));
        assert!(!DocumentKind::Admission.allowed_extensions().contains(&"png"));
    }
}
