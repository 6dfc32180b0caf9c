use serde::Serialize;

use super::entities::{FacultyCategory, FacultyMember};

#[derive(Debug, Clone, Serialize)]
pub struct FacultyRecord {
    pub id: i64,
    pub category: FacultyCategory,
    pub category_display: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub education: String,
    pub experience: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
}

impl FacultyRecord {
    pub fn from_member(member: FacultyMember, file_url: impl Fn(&str) -> String) -> Self {
        Self {
            id: member.id,
            category: member.category,
            category_display: member.category.display_name().to_string(),
            name: member.name,
            position: member.position,
            department: member.department,
            education: member.education,
            experience: member.experience,
            email: member.email,
            phone: member.phone,
            photo_url: member.photo.as_deref().map(file_url).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacultyListResponse {
    pub members: Vec<FacultyRecord>,
}
