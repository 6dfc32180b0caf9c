//! 教职工存储操作

use super::{SeaOrmStorage, db_error, now_timestamp, require_text};
use crate::entity::faculty_members;
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::faculty::{
    entities::{FacultyCategory, FacultyMember},
    requests::CreateFacultyMemberRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_faculty_member_impl(
        &self,
        req: CreateFacultyMemberRequest,
    ) -> Result<FacultyMember> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let position = require_text(&mut errors, "position", &req.position);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = faculty_members::ActiveModel {
            category: Set(req.category.as_str().to_string()),
            name: Set(name),
            position: Set(position),
            department: Set(req.department.trim().to_string()),
            education: Set(req.education.trim().to_string()),
            experience: Set(req.experience.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            phone: Set(req.phone.trim().to_string()),
            photo: Set(req.photo.filter(|p| !p.trim().is_empty())),
            is_active: Set(req.is_active),
            order: Set(req.order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建教职工"))?;

        Ok(result.into_faculty_member())
    }

    /// 启用的教职工，按 (order, id) 排序，未知分类返回空列表
    pub async fn list_faculty_members_impl(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FacultyMember>> {
        let mut select =
            faculty_members::Entity::find().filter(faculty_members::Column::IsActive.eq(true));
        if let Some(category) = category {
            let Ok(category) = category.parse::<FacultyCategory>() else {
                return Ok(Vec::new());
            };
            select = select.filter(faculty_members::Column::Category.eq(category.as_str()));
        }

        let result = select
            .order_by_asc(faculty_members::Column::Order)
            .order_by_asc(faculty_members::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询教职工列表"))?;

        Ok(result.into_iter().map(|m| m.into_faculty_member()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, category: FacultyCategory, order: i32) -> CreateFacultyMemberRequest {
        CreateFacultyMemberRequest {
            category,
            name: name.into(),
            position: "Assistant Teacher".into(),
            department: String::new(),
            education: "M.Sc".into(),
            experience: "5".into(),
            email: String::new(),
            phone: String::new(),
            photo: Some(" ".into()),
            is_active: true,
            order,
        }
    }

    #[tokio::test]
    async fn test_faculty_filtered_and_ordered() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        for req in [
            member("Karim", FacultyCategory::Teacher, 2),
            member("Rahima", FacultyCategory::Teacher, 1),
            member("Jamal", FacultyCategory::Staff, 0),
            member("Salma", FacultyCategory::Teacher, 1),
        ] {
            storage.create_faculty_member_impl(req).await.unwrap();
        }
        let mut retired = member("Old", FacultyCategory::Teacher, 0);
        retired.is_active = false;
        storage.create_faculty_member_impl(retired).await.unwrap();

        let names: Vec<_> = storage
            .list_faculty_members_impl(Some("teacher"))
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Rahima", "Salma", "Karim"]);

        let staff = storage.list_faculty_members_impl(Some("staff")).await.unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].category, FacultyCategory::Staff);
        assert_eq!(staff[0].photo, None);

        assert_eq!(storage.list_faculty_members_impl(None).await.unwrap().len(), 4);
        assert!(
            storage
                .list_faculty_members_impl(Some("kormochari"))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_faculty_requires_name_and_position() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let mut req = member(" ", FacultyCategory::Management, 0);
        req.position = String::new();
        let err = storage.create_faculty_member_impl(req).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("position"));
    }
}
