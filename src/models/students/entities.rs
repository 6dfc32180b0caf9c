use serde::{Deserialize, Serialize};

// 学生性别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const MALE: &'static str = "Male";
    pub const FEMALE: &'static str = "Female";
    pub const OTHER: &'static str = "Other";

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE,
            Gender::Female => Self::FEMALE,
            Gender::Other => Self::OTHER,
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Gender::MALE => Ok(Gender::Male),
            Gender::FEMALE => Ok(Gender::Female),
            Gender::OTHER => Ok(Gender::Other),
            _ => Err(format!(
                "Invalid gender: '{s}'. Expected one of: Male, Female, Other"
            )),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    // 学号，仅在同一班级内唯一
    pub roll_number: String,
    pub registration_number: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    // 照片存储路径
    pub photo: Option<String>,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 带班级/系部名称的学生，供公开列表使用
#[derive(Debug, Clone)]
pub struct StudentView {
    pub student: Student,
    pub class_name: Option<String>,
    pub department_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trips_through_storage_text() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(gender.to_string().parse::<Gender>().unwrap(), gender);
        }
        assert!("male".parse::<Gender>().is_err());
    }
}
