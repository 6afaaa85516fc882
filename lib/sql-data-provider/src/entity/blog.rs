use blog_core::model::blog::Blog;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::BlogId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Blog)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: BlogId,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "created_date")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "last_modified")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
