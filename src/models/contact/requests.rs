use serde::Deserialize;

use crate::errors::FieldErrors;

// 留言提交（公开接口），字段缺失与空串同样处理
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// 通过校验的留言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub phone: String,
    pub title: String,
    pub message: String,
}

impl ContactSubmission {
    /// 去除首尾空白后逐字段检查必填
    pub fn validate(&self) -> Result<NewContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut take = |field: &str, value: &Option<String>, msg: &str| -> String {
            let trimmed = value.as_deref().unwrap_or_default().trim().to_string();
            if trimmed.is_empty() {
                errors.insert(field.to_string(), msg.to_string());
            }
            trimmed
        };

        let name = take("name", &self.name, "নাম আবশ্যক।");
        let phone = take("phone", &self.phone, "ফোন নম্বর আবশ্যক।");
        let title = take("title", &self.title, "বার্তার শিরোনাম আবশ্যক।");
        let message = take("message", &self.message, "বার্তার বিবরণ আবশ্যক।");

        if errors.is_empty() {
            Ok(NewContactMessage {
                name,
                phone,
                title,
                message,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, phone: &str, title: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: Some(name.into()),
            phone: Some(phone.into()),
            title: Some(title.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let accepted = submission("  Rahim ", "017", "Admission", " When? ")
            .validate()
            .unwrap();
        assert_eq!(accepted.name, "Rahim");
        assert_eq!(accepted.message, "When?");
    }

    #[test]
    fn test_blank_phone_is_reported() {
        let errors = submission("Rahim", "   ", "Admission", "When?")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("phone"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = ContactSubmission::default().validate().unwrap_err();
        let fields: Vec<_> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, ["message", "name", "phone", "title"]);
    }
}
