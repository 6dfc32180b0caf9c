//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 写入校验失败单独使用 `Validation` 变体，携带字段级错误表。

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// 字段名 -> 错误说明
pub type FieldErrors = BTreeMap<String, String>;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义（外加固定的 `Validation(FieldErrors)` 变体）
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
            Validation(FieldErrors),
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                    PortalError::Validation(_) => "E100",
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                    PortalError::Validation(_) => "Validation Error",
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> Cow<'_, str> {
                match self {
                    $(PortalError::$variant(msg) => Cow::Borrowed(msg.as_str()),)*
                    PortalError::Validation(errors) => Cow::Owned(
                        errors
                            .iter()
                            .map(|(field, msg)| format!("{field}: {msg}"))
                            .collect::<Vec<_>>()
                            .join("; "),
                    ),
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Transient("E008", "Transient Storage Error"),
}

impl PortalError {
    /// 单字段校验错误
    pub fn field<F: Into<String>, M: Into<String>>(field: F, msg: M) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), msg.into());
        PortalError::Validation(errors)
    }

    /// 多字段校验错误
    pub fn validation(errors: FieldErrors) -> Self {
        PortalError::Validation(errors)
    }

    /// 校验错误的字段表
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            PortalError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortalError::NotFound(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::database_config("test").code(), "E001");
        assert_eq!(PortalError::not_found("test").code(), "E005");
        assert_eq!(PortalError::transient("test").code(), "E008");
        assert_eq!(PortalError::field("name", "required").code(), "E100");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            PortalError::field("slug", "taken").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("phone".into(), "This field is required.".into());
        errors.insert("name".into(), "This field is required.".into());
        let err = PortalError::validation(errors);
        // BTreeMap 按字段名排序
        assert_eq!(
            err.message(),
            "name: This field is required.; phone: This field is required."
        );
        assert_eq!(err.field_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::not_found("Notice 7 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Notice 7"));
        assert!(err.is_not_found());
        assert!(err.field_errors().is_none());
    }
}
