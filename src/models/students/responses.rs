use serde::Serialize;

use super::entities::StudentView;
use crate::utils::format::student_fallback_image;

// 公开学生记录
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub roll: String,
    pub registration: String,
    pub class_name: String,
    pub department: String,
    pub image: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub address: String,
}

impl StudentRecord {
    /// 无照片时使用按 ID 取模的占位图
    pub fn from_view(view: StudentView, file_url: impl Fn(&str) -> String) -> Self {
        let StudentView {
            student,
            class_name,
            department_name,
        } = view;
        let image = match student.photo.as_deref() {
            Some(photo) if !photo.is_empty() => file_url(photo),
            _ => student_fallback_image(student.id),
        };

        Self {
            id: student.id,
            name: student.name,
            roll: student.roll_number,
            registration: student.registration_number,
            class_name: class_name.unwrap_or_default(),
            department: department_name.unwrap_or_default(),
            image,
            guardian_name: student.guardian_name,
            guardian_phone: student.guardian_phone,
            address: student.address,
        }
    }
}

// 男女生人数汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudentCounts {
    pub male: i64,
    pub female: i64,
    pub total: i64,
}

impl StudentCounts {
    pub fn new(male: i64, female: i64) -> Self {
        Self {
            male,
            female,
            total: male + female,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentFilterResponse {
    pub students: Vec<StudentRecord>,
    pub counts: StudentCounts,
}
