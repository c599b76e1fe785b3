use sea_orm::entity::prelude::*;

/// A seminar category.
///
/// Categories are reference data, seeded by the migrations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// The category ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The category name.
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seminars::Entity")]
    Seminars,
}

impl Related<super::seminars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seminars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
