use serde::Serialize;

/// 业务错误码，随 ApiResponse.code 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    ValidationFailed = 1022,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,
    AdminDisabled = 1503,

    // 目录数据
    ClassNotFound = 2000,
    DepartmentNotFound = 2001,
    NoticeTypeNotFound = 2002,
    RoutineTypeNotFound = 2003,
    StudentNotFound = 2004,

    // 文档与文件
    DocumentNotFound = 3000,
    FileNotFound = 3001,
    FileUploadFailed = 3002,
    FileTypeNotAllowed = 3003,
    FileSizeExceeded = 3004,
    MultifileUploadNotAllowed = 3005,

    // 站点内容
    EventNotFound = 4000,
    ContactMessageNotFound = 4001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::ValidationFailed as i32, 1022);
        assert_eq!(ErrorCode::DocumentNotFound as i32, 3000);
    }
}
