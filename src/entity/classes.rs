//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub name_en: String,
    #[sea_orm(unique)]
    pub numeric_value: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub male_student: i32,
    pub female_student: i32,
    pub show_students_publicly: bool,
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

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::catalog::entities::Class {
        use crate::models::catalog::entities::Class;

        Class {
            id: self.id,
            name: self.name,
            name_en: self.name_en,
            numeric_value: self.numeric_value,
            description: self.description,
            male_student: self.male_student,
            female_student: self.female_student,
            show_students_publicly: self.show_students_publicly,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
