//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub roll_number: String,
    pub registration_number: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    pub photo: Option<String>,
    pub guardian_name: String,
    pub guardian_phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id",
        on_delete = "SetNull"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_delete = "SetNull"
    )]
    Department,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Gender, Student};

        Student {
            id: self.id,
            name: self.name,
            // 未知取值按 Other 处理
            gender: self.gender.parse().unwrap_or(Gender::Other),
            roll_number: self.roll_number,
            registration_number: self.registration_number,
            class_id: self.class_id,
            department_id: self.department_id,
            photo: self.photo,
            guardian_name: self.guardian_name,
            guardian_phone: self.guardian_phone,
            address: self.address,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
