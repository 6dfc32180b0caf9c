//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间戳统一以 Unix 秒存储。

pub mod prelude;

pub mod admissions;
pub mod books;
pub mod classes;
pub mod contact_messages;
pub mod departments;
pub mod event_news;
pub mod event_news_images;
pub mod faculty_members;
pub mod facility_infos;
pub mod facility_types;
pub mod gallery;
pub mod important_links;
pub mod notice_types;
pub mod notices;
pub mod results;
pub mod routine_types;
pub mod routines;
pub mod students;
pub mod syllabuses;
pub mod videos;

use chrono::{DateTime, Utc};

pub(crate) fn to_datetime(timestamp: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_default()
}
