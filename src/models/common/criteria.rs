//! 过滤条件
//!
//! 公开列表接口共用的查询参数。参数格式不合法时视为未提供，按下一优先级处理：
//! 班级 > 系部 > 不过滤。

use crate::utils::extractor::{FromQueryPairs, QueryPairs};

/// 过滤条件（来自查询字符串）
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// 分类：通知类型 slug、课表类别、相册分类、设施类型名称或活动类型
    pub kind: Option<String>,
    pub class_id: Option<String>,
    pub department_slug: Option<String>,
}

impl FromQueryPairs for Criteria {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            kind: pairs.last(&["type", "type_slug", "category"]),
            class_id: pairs.last(&["class_id"]),
            department_slug: pairs.last(&["department_slug", "dept_slug", "department"]),
        }
    }
}

/// 过滤范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Class(i64),
    Department(String),
}

impl Criteria {
    pub fn for_class(class_id: i64) -> Self {
        Self {
            class_id: Some(class_id.to_string()),
            ..Default::default()
        }
    }

    pub fn for_department(slug: impl Into<String>) -> Self {
        Self {
            department_slug: Some(slug.into()),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// 班级 ID 只接受非负整数
    pub fn parsed_class_id(&self) -> Option<i64> {
        let raw = self.class_id.as_deref()?.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<i64>().ok()
    }

    pub fn scope(&self) -> Scope {
        if let Some(class_id) = self.parsed_class_id() {
            return Scope::Class(class_id);
        }
        match self.department_slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => Scope::Department(slug.to_string()),
            _ => Scope::All,
        }
    }

    /// 分类过滤值，空串与 `all` 均表示不过滤
    pub fn kind_filter(&self) -> Option<&str> {
        match self.kind.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case("all") => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Criteria {
        Criteria::from_query(query)
    }

    #[test]
    fn test_class_takes_precedence_over_department() {
        let criteria = parse("class_id=4&dept_slug=science");
        assert_eq!(criteria.scope(), Scope::Class(4));
    }

    #[test]
    fn test_malformed_class_id_falls_through() {
        assert_eq!(
            parse("class_id=abc&dept_slug=science").scope(),
            Scope::Department("science".into())
        );
        assert_eq!(parse("class_id=abc").scope(), Scope::All);
        assert_eq!(parse("class_id=-3").scope(), Scope::All);
        assert_eq!(parse("class_id=%2B3").scope(), Scope::All);
        assert_eq!(parse("class_id=").scope(), Scope::All);
    }

    #[test]
    fn test_parameter_aliases() {
        assert_eq!(
            parse("department=arts").scope(),
            Scope::Department("arts".into())
        );
        assert_eq!(parse("type_slug=exam").kind_filter(), Some("exam"));
        assert_eq!(parse("type=exam").kind_filter(), Some("exam"));
        assert_eq!(parse("category=school").kind_filter(), Some("school"));
    }

    #[test]
    fn test_repeated_parameters_take_last_value() {
        assert_eq!(parse("class_id=1&class_id=2").scope(), Scope::Class(2));
        assert_eq!(parse("type_slug=general&type=all").kind_filter(), None);
        assert_eq!(
            parse("dept_slug=a&department=b").scope(),
            Scope::Department("b".into())
        );
    }

    #[test]
    fn test_all_and_blank_kind_mean_unfiltered() {
        assert_eq!(parse("type=all").kind_filter(), None);
        assert_eq!(parse("type=").kind_filter(), None);
        assert_eq!(parse("").kind_filter(), None);
        assert_eq!(parse("dept_slug=").scope(), Scope::All);
    }

    #[test]
    fn test_builders() {
        let criteria = Criteria::for_department("science").with_kind("exam");
        assert_eq!(criteria.scope(), Scope::Department("science".into()));
        assert_eq!(criteria.kind_filter(), Some("exam"));
        assert_eq!(Criteria::for_class(9).scope(), Scope::Class(9));
    }
}
