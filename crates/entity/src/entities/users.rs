use sea_orm::entity::prelude::*;

/// A user identity.
///
/// The identities are managed by the authentication layer. The seminar service only reads
/// them, to resolve the organizer of a seminar and its display name.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// The user ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The username, used as display name.
    #[sea_orm(unique, column_type = "String(StringLen::N(256))")]
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seminars::Entity")]
    Seminars,
    #[sea_orm(has_many = "super::seminar_participants::Entity")]
    SeminarParticipants,
}

impl Related<super::seminar_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeminarParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
