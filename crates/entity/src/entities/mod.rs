pub mod prelude;

pub mod categories;
pub mod seminar_participants;
pub mod seminars;
pub mod users;
