use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教职工表
        manager
            .create_table(
                Table::create()
                    .table(FacultyMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacultyMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Category)
                            .string()
                            .not_null()
                            .default("teacher"),
                    )
                    .col(ColumnDef::new(FacultyMembers::Name).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::Position).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::Department)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Education)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Experience)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Email)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Phone)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(FacultyMembers::Photo).string().null())
                    .col(
                        ColumnDef::new(FacultyMembers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_faculty_members_category_order")
                    .table(FacultyMembers::Table)
                    .col(FacultyMembers::Category)
                    .col(FacultyMembers::Order)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacultyMembers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum FacultyMembers {
    #[sea_orm(iden = "faculty_members")]
    Table,
    Id,
    Category,
    Name,
    Position,
    Department,
    Education,
    Experience,
    Email,
    Phone,
    Photo,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}
