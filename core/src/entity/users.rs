use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub signup_date: DateTime,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub scratch_ingredients: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub scratch_recipes: Option<Json>,
    pub scratch_version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
