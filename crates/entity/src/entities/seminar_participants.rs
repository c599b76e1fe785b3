use sea_orm::entity::prelude::*;

/// The association between seminars and the users who joined them.
///
/// The composite primary key prevents a user from joining the same seminar twice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "seminar_participants")]
pub struct Model {
    /// The ID of the seminar.
    #[sea_orm(primary_key, auto_increment = false)]
    pub seminar_id: i32,
    /// The ID of the participant.
    #[sea_orm(primary_key, auto_increment = false)]
    pub participant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seminars::Entity",
        from = "Column::SeminarId",
        to = "super::seminars::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Seminar,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ParticipantId",
        to = "super::users::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Participant,
}

impl Related<super::seminars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seminar.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
