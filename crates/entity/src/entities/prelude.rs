pub use super::categories::Entity as Categories;
pub use super::seminar_participants::Entity as SeminarParticipants;
pub use super::seminars::Entity as Seminars;
pub use super::users::Entity as Users;
