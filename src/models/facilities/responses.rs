use serde::Serialize;

use super::entities::FacilityView;

#[derive(Debug, Clone, Serialize)]
pub struct FacilityRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub type_display: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub count: i32,
    pub unit: String,
    pub image_url: String,
}

impl FacilityRecord {
    pub fn from_view(view: FacilityView, file_url: impl Fn(&str) -> String) -> Self {
        let FacilityView { facility, type_name } = view;
        let type_name = type_name.unwrap_or_default();
        Self {
            id: facility.id,
            type_display: type_name.clone(),
            facility_type: type_name,
            title: facility.title,
            description: facility.description,
            icon: facility.icon,
            count: facility.count,
            unit: facility.unit,
            image_url: facility
                .image
                .as_deref()
                .map(file_url)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacilityListResponse {
    pub facilities: Vec<FacilityRecord>,
}
