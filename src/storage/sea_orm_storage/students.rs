//! 学生存储操作

use std::collections::HashSet;

use super::{SeaOrmStorage, db_error, now_timestamp, require_text, write_error};
use crate::entity::{classes, departments, students};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo, Scope,
    students::{
        entities::{Student, StudentView},
        requests::{CreateStudentRequest, StudentListParams},
        responses::StudentCounts,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生，同一班级内学号唯一
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let roll_number = require_text(&mut errors, "roll_number", &req.roll_number);
        let registration_number =
            require_text(&mut errors, "registration_number", &req.registration_number);

        self.check_references(&mut errors, req.class_id, req.department_id)
            .await?;

        if let Some(class_id) = req.class_id
            && !roll_number.is_empty()
            && !errors.contains_key("class_id")
        {
            let taken = students::Entity::find()
                .filter(students::Column::ClassId.eq(class_id))
                .filter(students::Column::RollNumber.eq(roll_number.as_str()))
                .count(&self.db)
                .await
                .map_err(db_error("查询学生"))?
                > 0;
            if taken {
                errors.insert(
                    "roll_number".into(),
                    format!("Roll number {roll_number} is already used in this class."),
                );
            }
        }

        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = students::ActiveModel {
            name: Set(name),
            gender: Set(req.gender.to_string()),
            roll_number: Set(roll_number),
            registration_number: Set(registration_number),
            class_id: Set(req.class_id),
            department_id: Set(req.department_id),
            photo: Set(req.photo.filter(|p| !p.trim().is_empty())),
            guardian_name: Set(req.guardian_name),
            guardian_phone: Set(req.guardian_phone),
            address: Set(req.address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "roll_number", "创建学生"))?;

        Ok(result.into_student())
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = students::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除学生"))?;

        Ok(result.rows_affected > 0)
    }

    /// 管理端分页列出学生
    pub async fn list_students_impl(
        &self,
        params: StudentListParams,
    ) -> Result<PaginatedResponse<Student>> {
        let (page, size) = params.pagination.normalized();

        let mut select = students::Entity::find();
        if let Some(class_id) = params.class_id() {
            select = select.filter(students::Column::ClassId.eq(class_id));
        }
        select = select
            .order_by_asc(students::Column::ClassId)
            .order_by_asc(students::Column::RollNumber)
            .order_by_asc(students::Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询学生总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询学生页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询学生列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages: pages,
            },
        })
    }

    /// 人数统计
    ///
    /// 班级范围取该班级手工维护的人数（不论是否公开）；系部范围对
    /// 所有有该系部学生的班级求和；其余情况为零。
    pub async fn student_counts_impl(&self, scope: &Scope) -> Result<StudentCounts> {
        let counted: Vec<classes::Model> = match scope {
            Scope::Class(class_id) => classes::Entity::find_by_id(*class_id)
                .one(&self.db)
                .await
                .map_err(db_error("查询班级"))?
                .into_iter()
                .collect(),
            Scope::Department(slug) => match self.department_id_by_slug(slug).await? {
                Some(department_id) => self.classes_with_department_students(department_id).await?,
                None => Vec::new(),
            },
            Scope::All => Vec::new(),
        };

        let (male, female) = counted.iter().fold((0i64, 0i64), |(m, f), class| {
            (m + i64::from(class.male_student), f + i64::from(class.female_student))
        });
        Ok(StudentCounts::new(male, female))
    }

    /// 公开名单
    ///
    /// 班级范围仅在班级公开时返回其学生；系部范围返回该系部中
    /// 属于公开班级的学生。
    pub async fn visible_students_impl(&self, scope: &Scope) -> Result<Vec<StudentView>> {
        let select = match scope {
            Scope::Class(class_id) => {
                let class = classes::Entity::find_by_id(*class_id)
                    .one(&self.db)
                    .await
                    .map_err(db_error("查询班级"))?;
                match class {
                    Some(class) if class.show_students_publicly => {
                        students::Entity::find().filter(students::Column::ClassId.eq(class.id))
                    }
                    _ => return Ok(Vec::new()),
                }
            }
            Scope::Department(slug) => {
                let Some(department_id) = self.department_id_by_slug(slug).await? else {
                    return Ok(Vec::new());
                };
                let public_ids: Vec<i64> = self
                    .classes_with_department_students(department_id)
                    .await?
                    .into_iter()
                    .filter(|class| class.show_students_publicly)
                    .map(|class| class.id)
                    .collect();
                if public_ids.is_empty() {
                    return Ok(Vec::new());
                }
                students::Entity::find()
                    .filter(students::Column::DepartmentId.eq(department_id))
                    .filter(students::Column::ClassId.is_in(public_ids))
            }
            Scope::All => return Ok(Vec::new()),
        };

        let rows = select
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生列表"))?;

        let class_ids: HashSet<i64> = rows.iter().filter_map(|s| s.class_id).collect();
        let department_ids: HashSet<i64> = rows.iter().filter_map(|s| s.department_id).collect();
        let class_names = self.class_names(class_ids).await?;
        let department_names = self.department_names(department_ids).await?;

        Ok(rows
            .into_iter()
            .map(|model| {
                let student = model.into_student();
                StudentView {
                    class_name: student.class_id.and_then(|id| class_names.get(&id).cloned()),
                    department_name: student
                        .department_id
                        .and_then(|id| department_names.get(&id).cloned()),
                    student,
                }
            })
            .collect())
    }

    async fn department_id_by_slug(&self, slug: &str) -> Result<Option<i64>> {
        let department = departments::Entity::find()
            .filter(departments::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(db_error("查询系部"))?;
        Ok(department.map(|d| d.id))
    }

    /// 至少有一名该系部学生的班级
    async fn classes_with_department_students(
        &self,
        department_id: i64,
    ) -> Result<Vec<classes::Model>> {
        let class_ids: HashSet<i64> = students::Entity::find()
            .filter(students::Column::DepartmentId.eq(department_id))
            .filter(students::Column::ClassId.is_not_null())
            .all(&self.db)
            .await
            .map_err(db_error("查询学生"))?
            .into_iter()
            .filter_map(|s| s.class_id)
            .collect();

        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        classes::Entity::find()
            .filter(classes::Column::Id.is_in(class_ids))
            .order_by_asc(classes::Column::NumericValue)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaginationQuery;
    use crate::models::catalog::requests::{CreateClassRequest, CreateDepartmentRequest};
    use crate::models::students::entities::Gender;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory().await.unwrap()
    }

    async fn class(storage: &SeaOrmStorage, value: i32, male: i32, female: i32, public: bool) -> i64 {
        storage
            .create_class_impl(CreateClassRequest {
                name: format!("শ্রেণি {value}"),
                name_en: format!("Class {value}"),
                numeric_value: value,
                description: String::new(),
                male_student: male,
                female_student: female,
                show_students_publicly: public,
            })
            .await
            .unwrap()
            .id
    }

    async fn department(storage: &SeaOrmStorage, name_en: &str) -> i64 {
        storage
            .create_department_impl(CreateDepartmentRequest {
                name: name_en.to_string(),
                name_en: name_en.to_string(),
                icon: String::new(),
                description: String::new(),
                male_student: 0,
                female_student: 0,
                slug: None,
            })
            .await
            .unwrap()
            .id
    }

    fn student(roll: &str, class_id: Option<i64>, department_id: Option<i64>) -> CreateStudentRequest {
        CreateStudentRequest {
            name: format!("Student {roll}"),
            gender: Gender::Female,
            roll_number: roll.to_string(),
            registration_number: format!("REG-{roll}"),
            class_id,
            department_id,
            photo: None,
            guardian_name: "Guardian".into(),
            guardian_phone: "017".into(),
            address: "Dhaka".into(),
        }
    }

    #[tokio::test]
    async fn test_roll_number_unique_per_class() {
        let storage = storage().await;
        let six = class(&storage, 6, 0, 0, true).await;
        let seven = class(&storage, 7, 0, 0, true).await;

        storage.create_student_impl(student("1", Some(six), None)).await.unwrap();
        // 不同班级可以重复
        storage.create_student_impl(student("1", Some(seven), None)).await.unwrap();

        let err = storage
            .create_student_impl(student("1", Some(six), None))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("roll_number"));
    }

    #[tokio::test]
    async fn test_private_class_counts_without_rows() {
        let storage = storage().await;
        let six = class(&storage, 6, 20, 15, false).await;
        storage.create_student_impl(student("1", Some(six), None)).await.unwrap();

        let scope = Scope::Class(six);
        let counts = storage.student_counts_impl(&scope).await.unwrap();
        assert_eq!(counts, StudentCounts::new(20, 15));
        assert_eq!(counts.total, 35);
        assert!(storage.visible_students_impl(&scope).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_class_and_unscoped() {
        let storage = storage().await;
        let scope = Scope::Class(404);
        assert_eq!(
            storage.student_counts_impl(&scope).await.unwrap(),
            StudentCounts::default()
        );
        assert!(storage.visible_students_impl(&scope).await.unwrap().is_empty());
        assert_eq!(
            storage.student_counts_impl(&Scope::All).await.unwrap(),
            StudentCounts::default()
        );
    }

    #[tokio::test]
    async fn test_department_views() {
        let storage = storage().await;
        let science = department(&storage, "Science").await;
        let nine = class(&storage, 9, 30, 25, true).await;
        let ten = class(&storage, 10, 40, 35, false).await;
        // 没有理科学生的班级不计入
        let eight = class(&storage, 8, 100, 100, true).await;

        storage.create_student_impl(student("1", Some(nine), Some(science))).await.unwrap();
        storage.create_student_impl(student("2", Some(ten), Some(science))).await.unwrap();
        storage.create_student_impl(student("3", Some(eight), None)).await.unwrap();

        let scope = Scope::Department("science".into());
        let counts = storage.student_counts_impl(&scope).await.unwrap();
        assert_eq!(counts, StudentCounts::new(70, 60));

        let rows = storage.visible_students_impl(&scope).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student.roll_number, "1");
        assert_eq!(rows[0].class_name.as_deref(), Some("শ্রেণি 9"));
        assert_eq!(rows[0].department_name.as_deref(), Some("Science"));

        let unknown = Scope::Department("arts".into());
        assert_eq!(
            storage.student_counts_impl(&unknown).await.unwrap(),
            StudentCounts::default()
        );
    }

    #[tokio::test]
    async fn test_admin_list_filters_by_class() {
        let storage = storage().await;
        let six = class(&storage, 6, 0, 0, false).await;
        for roll in ["3", "1", "2"] {
            storage.create_student_impl(student(roll, Some(six), None)).await.unwrap();
        }
        storage.create_student_impl(student("9", None, None)).await.unwrap();

        let params = StudentListParams {
            pagination: PaginationQuery {
                page: Some(1),
                size: Some(2),
            },
            class_id: Some(six.to_string()),
        };
        let page = storage.list_students_impl(params).await.unwrap();
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
        let rolls: Vec<_> = page.items.iter().map(|s| s.roll_number.as_str()).collect();
        assert_eq!(rolls, ["1", "2"]);

        let all = storage
            .list_students_impl(StudentListParams::default())
            .await
            .unwrap();
        assert_eq!(all.pagination.total, 4);
    }

    #[tokio::test]
    async fn test_missing_class_reference_rejected() {
        let storage = storage().await;
        let err = storage
            .create_student_impl(student("1", Some(77), None))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("class_id"));

        let mut blank = student("", None, None);
        blank.name = "  ".into();
        let err = storage.create_student_impl(blank).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("roll_number"));

        assert!(!storage.delete_student_impl(1).await.unwrap());
    }
}
