//! 系部实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub male_student: i32,
    pub female_student: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_department(self) -> crate::models::catalog::entities::Department {
        use crate::models::catalog::entities::Department;

        Department {
            id: self.id,
            name: self.name,
            name_en: self.name_en,
            icon: self.icon,
            description: self.description,
            male_student: self.male_student,
            female_student: self.female_student,
            slug: self.slug,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
