//! 设施信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_infos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub facility_type_id: Option<i64>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: String,
    pub count: i32,
    pub unit: String,
    pub image: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::facility_types::Entity",
        from = "Column::FacilityTypeId",
        to = "super::facility_types::Column::Id",
        on_delete = "SetNull"
    )]
    FacilityType,
}

impl Related<super::facility_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FacilityType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_facility(self) -> crate::models::facilities::entities::FacilityInfo {
        crate::models::facilities::entities::FacilityInfo {
            id: self.id,
            facility_type_id: self.facility_type_id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            count: self.count,
            unit: self.unit,
            image: self.image,
            is_active: self.is_active,
            order: self.order,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
