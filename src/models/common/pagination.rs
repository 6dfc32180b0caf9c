use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_SIZE: u64 = 20;
const MAX_SIZE: u64 = 100;

// 分页查询参数，接受数字或数字字符串，非法值按缺省处理
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size: Option<u64>,
}

impl PaginationQuery {
    /// 规范化后的 (页码, 每页条数)，页码从 1 开始
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = self.size.unwrap_or(DEFAULT_SIZE).clamp(1, MAX_SIZE);
        (page, size)
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let query = PaginationQuery::default();
        assert_eq!(query.normalized(), (1, 20));

        let query = PaginationQuery {
            page: Some(0),
            size: Some(1000),
        };
        assert_eq!(query.normalized(), (1, 100));
    }

    #[test]
    fn test_string_values_from_query() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page": "3", "size": "x"}"#).unwrap();
        assert_eq!(query.page, Some(3));
        assert_eq!(query.size, None);
    }
}
