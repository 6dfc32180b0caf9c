pub mod catalog;
pub mod common;
pub mod contact;
pub mod documents;
pub mod events;
pub mod facilities;
pub mod faculty;
pub mod files;
pub mod links;
pub mod media;
pub mod students;
pub mod system;

pub use common::{
    ApiResponse, Criteria, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery, Scope,
};

/// 服务启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
