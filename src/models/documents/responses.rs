use serde::Serialize;

use super::entities::{DocumentDetails, DocumentKind, DocumentView};
use crate::utils::format::{display_date, notice_background_color};

/// 公开列表中的文档记录
///
/// 关联对象不存在时名称为空串，键始终存在。
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub title: String,
    pub class_name: String,
    pub department: String,
    pub updated_at: String,
    pub created_at: String,
    pub file_url: String,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_type: Option<String>,
}

/// 公开列表响应，集合键名随文档种类变化，如 `{"notices": [...]}`
#[derive(Debug)]
pub struct DocumentListResponse {
    pub kind: DocumentKind,
    pub records: Vec<DocumentRecord>,
}

impl Serialize for DocumentListResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.collection(), &self.records)?;
        map.end()
    }
}

impl DocumentRecord {
    /// 展开为公开记录，`file_url` 把存储路径转换为公开地址
    pub fn from_view(view: DocumentView, file_url: impl Fn(&str) -> String) -> Self {
        let DocumentView {
            document,
            class_name,
            department_name,
            type_name,
        } = view;

        let mut record = Self {
            id: document.id,
            title: document.title,
            class_name: class_name.unwrap_or_default(),
            department: department_name.unwrap_or_default(),
            updated_at: display_date(&document.updated_at),
            created_at: display_date(&document.created_at),
            file_url: file_url(&document.file),
            download_url: document.kind.download_url(document.id),
            short_description: None,
            notice_type: None,
            background_color: None,
            category: None,
            routine_type: None,
        };

        match document.details {
            DocumentDetails::Notice {
                short_description, ..
            } => {
                record.short_description = Some(short_description);
                record.notice_type = Some(type_name.unwrap_or_default());
                record.background_color = Some(notice_background_color(document.id));
            }
            DocumentDetails::Routine { category, .. } => {
                record.category = Some(category.as_str());
                record.routine_type = Some(type_name.unwrap_or_default());
            }
            DocumentDetails::Plain => {}
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::documents::entities::{Document, RoutineCategory};
    use chrono::TimeZone;

    fn view(kind: DocumentKind, details: DocumentDetails) -> DocumentView {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap();
        DocumentView {
            document: Document {
                id: 7,
                kind,
                title: "Annual exam".into(),
                file: format!("{}/annual.pdf", kind.collection()),
                class_id: None,
                department_id: Some(2),
                is_active: true,
                details,
                created_at: at,
                updated_at: at,
            },
            class_name: None,
            department_name: Some("Science".into()),
            type_name: None,
        }
    }

    fn url(path: &str) -> String {
        format!("/media/{path}")
    }

    #[test]
    fn test_plain_record_keys() {
        let record = DocumentRecord::from_view(view(DocumentKind::Book, DocumentDetails::Plain), url);
        assert_eq!(record.class_name, "");
        assert_eq!(record.department, "Science");
        assert_eq!(record.updated_at, "05 Mar 2025");
        assert_eq!(record.file_url, "/media/books/annual.pdf");
        assert_eq!(record.download_url, "/download-book/7/");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("class_name").is_some());
        assert!(json.get("notice_type").is_none());
    }

    #[test]
    fn test_notice_and_routine_extras() {
        let notice = DocumentRecord::from_view(
            view(
                DocumentKind::Notice,
                DocumentDetails::Notice {
                    short_description: "Holiday".into(),
                    notice_type_id: 1,
                },
            ),
            url,
        );
        assert_eq!(notice.short_description.as_deref(), Some("Holiday"));
        assert_eq!(notice.notice_type.as_deref(), Some(""));
        assert_eq!(notice.background_color, Some(notice_background_color(7)));

        let routine = DocumentRecord::from_view(
            view(
                DocumentKind::Routine,
                DocumentDetails::Routine {
                    category: RoutineCategory::Exam,
                    routine_type_id: None,
                },
            ),
            url,
        );
        assert_eq!(routine.category, Some("exam"));
        assert_eq!(routine.download_url, "/download-routine/7/");
    }

    #[test]
    fn test_list_response_uses_collection_key() {
        let response = DocumentListResponse {
            kind: DocumentKind::Syllabus,
            records: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "syllabus": [] })
        );
    }
}
