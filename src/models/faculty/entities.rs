use serde::{Deserialize, Serialize};

// 教职工分类
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FacultyCategory {
    Teacher,
    Management,
    Administration,
    Staff,
}

impl FacultyCategory {
    pub const ALL: [FacultyCategory; 4] = [
        FacultyCategory::Teacher,
        FacultyCategory::Management,
        FacultyCategory::Administration,
        FacultyCategory::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacultyCategory::Teacher => "teacher",
            FacultyCategory::Management => "management",
            FacultyCategory::Administration => "administration",
            FacultyCategory::Staff => "staff",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacultyCategory::Teacher => "Teacher",
            FacultyCategory::Management => "Management",
            FacultyCategory::Administration => "Administration",
            FacultyCategory::Staff => "Staff (Kormochari)",
        }
    }
}

impl std::str::FromStr for FacultyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FacultyCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid faculty category: '{s}'. Expected teacher, management, administration or staff"
                )
            })
    }
}

impl<'de> Deserialize<'de> for FacultyCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FacultyMember {
    pub id: i64,
    pub category: FacultyCategory,
    pub name: String,
    pub position: String,
    pub department: String,
    pub education: String,
    // 工作年限，自由文本
    pub experience: String,
    pub email: String,
    pub phone: String,
    pub photo: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "staff".parse::<FacultyCategory>().unwrap(),
            FacultyCategory::Staff
        );
        assert!("kormochari".parse::<FacultyCategory>().is_err());
        assert!("Teacher".parse::<FacultyCategory>().is_err());
    }
}
