//! 配置管理
//!
//! 配置按以下顺序叠加：内置默认值、`config.toml`、`config.{APP_ENV}.toml`、
//! `PORTAL_*` 环境变量，最后是若干常用环境变量的显式覆盖。

mod r#impl;
mod structs;

pub use structs::*;
