//! Length and range bounds of the seminar fields.
//!
//! Lengths are counted in characters, and both ends are inclusive.

pub const SEMINAR_TOPIC_MIN_LEN: u64 = 3;
pub const SEMINAR_TOPIC_MAX_LEN: u64 = 100;

pub const SEMINAR_LECTURER_MIN_LEN: u64 = 5;
pub const SEMINAR_LECTURER_MAX_LEN: u64 = 60;

pub const SEMINAR_DETAILS_MIN_LEN: u64 = 10;
pub const SEMINAR_DETAILS_MAX_LEN: u64 = 500;

/// In minutes.
pub const SEMINAR_DURATION_MIN: i32 = 30;
/// In minutes.
pub const SEMINAR_DURATION_MAX: i32 = 180;

pub const CATEGORY_NAME_MIN_LEN: u64 = 3;
pub const CATEGORY_NAME_MAX_LEN: u64 = 50;

pub const USERNAME_MAX_LEN: u64 = 256;
