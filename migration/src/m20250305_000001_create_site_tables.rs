use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建活动/新闻表
        manager
            .create_table(
                Table::create()
                    .table(EventNews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventNews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventNews::Title).string().not_null())
                    .col(ColumnDef::new(EventNews::Type).string().not_null())
                    .col(ColumnDef::new(EventNews::Description).text().not_null())
                    .col(ColumnDef::new(EventNews::Image).string().null())
                    .col(
                        ColumnDef::new(EventNews::Status)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(EventNews::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(EventNews::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 活动图集，随活动级联删除
        manager
            .create_table(
                Table::create()
                    .table(EventNewsImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventNewsImages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EventNewsImages::EventNewsId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventNewsImages::Image).string().not_null())
                    .col(ColumnDef::new(EventNewsImages::Title).string().null())
                    .col(ColumnDef::new(EventNewsImages::Description).text().null())
                    .col(
                        ColumnDef::new(EventNewsImages::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EventNewsImages::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventNewsImages::Table, EventNewsImages::EventNewsId)
                            .to(EventNews::Table, EventNews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建相册表
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gallery::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gallery::Title).string().not_null())
                    .col(ColumnDef::new(Gallery::Image).string().not_null())
                    .col(ColumnDef::new(Gallery::Category).string().not_null())
                    .col(ColumnDef::new(Gallery::Description).text().not_null())
                    .col(
                        ColumnDef::new(Gallery::IsSlider)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Gallery::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Gallery::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建视频表
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Videos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Videos::Title).string().not_null())
                    .col(ColumnDef::new(Videos::YoutubeUrl).string().not_null())
                    .col(ColumnDef::new(Videos::YoutubeId).string().not_null())
                    .col(ColumnDef::new(Videos::Description).text().not_null())
                    .col(
                        ColumnDef::new(Videos::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Videos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Videos::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建设施类型表
        manager
            .create_table(
                Table::create()
                    .table(FacilityTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacilityTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建设施信息表
        manager
            .create_table(
                Table::create()
                    .table(FacilityInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacilityInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FacilityInfos::FacilityTypeId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(FacilityInfos::Title).string().not_null())
                    .col(ColumnDef::new(FacilityInfos::Description).text().not_null())
                    .col(ColumnDef::new(FacilityInfos::Icon).string().not_null())
                    .col(
                        ColumnDef::new(FacilityInfos::Count)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(FacilityInfos::Unit).string().not_null())
                    .col(ColumnDef::new(FacilityInfos::Image).string().null())
                    .col(
                        ColumnDef::new(FacilityInfos::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FacilityInfos::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FacilityInfos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacilityInfos::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FacilityInfos::Table, FacilityInfos::FacilityTypeId)
                            .to(FacilityTypes::Table, FacilityTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建常用链接表
        manager
            .create_table(
                Table::create()
                    .table(ImportantLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImportantLinks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImportantLinks::Title).string().not_null())
                    .col(ColumnDef::new(ImportantLinks::Url).string().not_null())
                    .col(ColumnDef::new(ImportantLinks::Icon).string().not_null())
                    .col(
                        ColumnDef::new(ImportantLinks::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ImportantLinks::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ImportantLinks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportantLinks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建留言表
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Phone).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Title).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
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
                    .name("idx_event_news_images_event_news_id")
                    .table(EventNewsImages::Table)
                    .col(EventNewsImages::EventNewsId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_facility_infos_facility_type_id")
                    .table(FacilityInfos::Table)
                    .col(FacilityInfos::FacilityTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImportantLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacilityInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacilityTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventNewsImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventNews::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventNews {
    #[sea_orm(iden = "event_news")]
    Table,
    Id,
    Title,
    Type,
    Description,
    Image,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EventNewsImages {
    #[sea_orm(iden = "event_news_images")]
    Table,
    Id,
    EventNewsId,
    Image,
    Title,
    Description,
    Order,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Gallery {
    #[sea_orm(iden = "gallery")]
    Table,
    Id,
    Title,
    Image,
    Category,
    Description,
    IsSlider,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Videos {
    #[sea_orm(iden = "videos")]
    Table,
    Id,
    Title,
    YoutubeUrl,
    YoutubeId,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FacilityTypes {
    #[sea_orm(iden = "facility_types")]
    Table,
    Id,
    Name,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FacilityInfos {
    #[sea_orm(iden = "facility_infos")]
    Table,
    Id,
    FacilityTypeId,
    Title,
    Description,
    Icon,
    Count,
    Unit,
    Image,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ImportantLinks {
    #[sea_orm(iden = "important_links")]
    Table,
    Id,
    Title,
    Url,
    Icon,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactMessages {
    #[sea_orm(iden = "contact_messages")]
    Table,
    Id,
    Name,
    Phone,
    Title,
    Message,
    IsRead,
    CreatedAt,
}
