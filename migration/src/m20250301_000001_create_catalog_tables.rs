use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 文档类数据表（书籍、大纲、成绩、招生）共用的列定义
fn document_table(table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(DocumentCols::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(DocumentCols::Title).string().not_null())
        .col(ColumnDef::new(DocumentCols::File).string().not_null())
        .col(ColumnDef::new(DocumentCols::ClassId).big_integer().null())
        .col(ColumnDef::new(DocumentCols::DepartmentId).big_integer().null())
        .col(
            ColumnDef::new(DocumentCols::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(DocumentCols::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(DocumentCols::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        // 删除班级/系部时只清空引用，不级联删除文档
        .foreign_key(
            ForeignKey::create()
                .from(Alias::new(table), DocumentCols::ClassId)
                .to(Classes::Table, Classes::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Alias::new(table), DocumentCols::DepartmentId)
                .to(Departments::Table, Departments::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::NameEn).string().not_null())
                    .col(
                        ColumnDef::new(Classes::NumericValue)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::Description).text().not_null())
                    .col(
                        ColumnDef::new(Classes::MaleStudent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Classes::FemaleStudent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Classes::ShowStudentsPublicly)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建系部表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(ColumnDef::new(Departments::NameEn).string().not_null())
                    .col(ColumnDef::new(Departments::Icon).string().not_null())
                    .col(ColumnDef::new(Departments::Description).text().not_null())
                    .col(
                        ColumnDef::new(Departments::MaleStudent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Departments::FemaleStudent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Departments::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知类型表
        manager
            .create_table(
                Table::create()
                    .table(NoticeTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NoticeTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NoticeTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(NoticeTypes::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(NoticeTypes::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NoticeTypes::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课表类型表
        manager
            .create_table(
                Table::create()
                    .table(RoutineTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoutineTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoutineTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(RoutineTypes::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::RollNumber).string().not_null())
                    .col(
                        ColumnDef::new(Students::RegistrationNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::ClassId).big_integer().null())
                    .col(ColumnDef::new(Students::DepartmentId).big_integer().null())
                    .col(ColumnDef::new(Students::Photo).string().null())
                    .col(ColumnDef::new(Students::GuardianName).string().not_null())
                    .col(ColumnDef::new(Students::GuardianPhone).string().not_null())
                    .col(ColumnDef::new(Students::Address).text().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 通知：文档公共列 + 简介、通知类型
        let mut notices = document_table("notices");
        notices
            .col(ColumnDef::new(Notices::ShortDescription).text().not_null())
            .col(ColumnDef::new(Notices::NoticeTypeId).big_integer().not_null())
            .foreign_key(
                ForeignKey::create()
                    .from(Notices::Table, Notices::NoticeTypeId)
                    .to(NoticeTypes::Table, NoticeTypes::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
        manager.create_table(notices).await?;

        // 课表：文档公共列 + 分类、课表类型
        let mut routines = document_table("routines");
        routines
            .col(ColumnDef::new(Routines::Category).string().not_null())
            .col(ColumnDef::new(Routines::RoutineTypeId).big_integer().null())
            .foreign_key(
                ForeignKey::create()
                    .from(Routines::Table, Routines::RoutineTypeId)
                    .to(RoutineTypes::Table, RoutineTypes::Id)
                    .on_delete(ForeignKeyAction::SetNull),
            );
        manager.create_table(routines).await?;

        for table in ["books", "syllabuses", "results", "admissions"] {
            manager.create_table(document_table(table)).await?;
        }

        // 创建索引
        // 同一班级内学号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_roll_class")
                    .table(Students::Table)
                    .col(Students::RollNumber)
                    .col(Students::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_department_id")
                    .table(Students::Table)
                    .col(Students::DepartmentId)
                    .to_owned(),
            )
            .await?;

        for table in [
            "notices",
            "routines",
            "books",
            "syllabuses",
            "results",
            "admissions",
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(format!("idx_{table}_class_id"))
                        .table(Alias::new(table))
                        .col(DocumentCols::ClassId)
                        .to_owned(),
                )
                .await?;
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(format!("idx_{table}_department_id"))
                        .table(Alias::new(table))
                        .col(DocumentCols::DepartmentId)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        for table in [
            "admissions",
            "results",
            "syllabuses",
            "books",
            "routines",
            "notices",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoutineTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NoticeTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    NameEn,
    NumericValue,
    Description,
    MaleStudent,
    FemaleStudent,
    ShowStudentsPublicly,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    NameEn,
    Icon,
    Description,
    MaleStudent,
    FemaleStudent,
    Slug,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NoticeTypes {
    #[sea_orm(iden = "notice_types")]
    Table,
    Id,
    Name,
    Slug,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RoutineTypes {
    #[sea_orm(iden = "routine_types")]
    Table,
    Id,
    Name,
    Slug,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Gender,
    RollNumber,
    RegistrationNumber,
    ClassId,
    DepartmentId,
    Photo,
    GuardianName,
    GuardianPhone,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DocumentCols {
    Id,
    Title,
    File,
    ClassId,
    DepartmentId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notices {
    #[sea_orm(iden = "notices")]
    Table,
    ShortDescription,
    NoticeTypeId,
}

#[derive(DeriveIden)]
enum Routines {
    #[sea_orm(iden = "routines")]
    Table,
    Category,
    RoutineTypeId,
}
