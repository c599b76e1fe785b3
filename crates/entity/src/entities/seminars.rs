use sea_orm::entity::prelude::*;

/// A seminar in the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "seminars")]
pub struct Model {
    /// The seminar ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The topic of the seminar.
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub topic: String,
    /// The name of the lecturer.
    #[sea_orm(column_type = "String(StringLen::N(60))")]
    pub lecturer: String,
    /// The description of the seminar.
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub details: String,
    /// When the seminar starts. It has no timezone, and a precision of a minute.
    pub date_and_time: DateTime,
    /// The duration of the seminar, in minutes.
    pub duration: i32,
    /// The ID of the category of the seminar.
    pub category_id: i32,
    /// The ID of the user who created the seminar.
    pub organizer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerId",
        to = "super::users::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Organizer,
    #[sea_orm(has_many = "super::seminar_participants::Entity")]
    SeminarParticipants,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::seminar_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeminarParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use sea_orm::{ColumnTrait as _, ColumnType, sea_query::StringLen};

    use super::Column;
    use crate::bounds;

    fn string_len(col: Column) -> Option<u32> {
        match col.def().get_column_type() {
            ColumnType::String(StringLen::N(n)) => Some(*n),
            _ => None,
        }
    }

    #[test]
    fn column_sizes_match_bounds() {
        assert_eq!(
            string_len(Column::Topic),
            Some(bounds::SEMINAR_TOPIC_MAX_LEN as u32)
        );
        assert_eq!(
            string_len(Column::Lecturer),
            Some(bounds::SEMINAR_LECTURER_MAX_LEN as u32)
        );
        assert_eq!(
            string_len(Column::Details),
            Some(bounds::SEMINAR_DETAILS_MAX_LEN as u32)
        );
    }
}
