//! 公开过滤接口的查询参数提取
//!
//! 查询字符串按键值对解析，同名参数取最后一个值，任何格式问题都不会让请求失败。

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

/// 按出现顺序保存的查询参数
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn parse(query: &str) -> Self {
        web::Query::<Vec<(String, String)>>::from_query(query)
            .map(|q| Self(q.into_inner()))
            .unwrap_or_default()
    }

    /// 任一别名最后一次出现的值
    pub fn last(&self, keys: &[&str]) -> Option<String> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| keys.contains(&key.as_str()))
            .map(|(_, value)| value.clone())
    }
}

/// 可由查询参数构建的过滤条件
pub trait FromQueryPairs: Sized {
    fn from_pairs(pairs: &QueryPairs) -> Self;

    fn from_query(query: &str) -> Self {
        Self::from_pairs(&QueryPairs::parse(query))
    }
}

/// 过滤条件提取器，解析永不失败
#[derive(Debug, Clone)]
pub struct FilterQuery<T>(pub T);

impl<T> FilterQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: FromQueryPairs> FromRequest for FilterQuery<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(FilterQuery(T::from_query(req.query_string()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_wins_across_aliases() {
        let pairs = QueryPairs::parse("type_slug=general&class_id=1&type=all&class_id=2");
        assert_eq!(pairs.last(&["class_id"]).as_deref(), Some("2"));
        assert_eq!(pairs.last(&["type", "type_slug"]).as_deref(), Some("all"));
        assert_eq!(pairs.last(&["dept_slug"]), None);
    }

    #[test]
    fn test_odd_query_strings_do_not_fail() {
        let pairs = QueryPairs::parse("class_id&=x&%zz=1&dept_slug=a%20b");
        assert_eq!(pairs.last(&["class_id"]).as_deref(), Some(""));
        assert_eq!(pairs.last(&["dept_slug"]).as_deref(), Some("a b"));
    }
}
