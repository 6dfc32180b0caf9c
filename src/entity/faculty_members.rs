//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub education: String,
    pub experience: String,
    pub email: String,
    pub phone: String,
    pub photo: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_faculty_member(self) -> crate::models::faculty::entities::FacultyMember {
        use crate::models::faculty::entities::{FacultyCategory, FacultyMember};

        FacultyMember {
            id: self.id,
            category: self.category.parse().unwrap_or(FacultyCategory::Teacher),
            name: self.name,
            position: self.position,
            department: self.department,
            education: self.education,
            experience: self.experience,
            email: self.email,
            phone: self.phone,
            photo: self.photo,
            is_active: self.is_active,
            order: self.order,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
