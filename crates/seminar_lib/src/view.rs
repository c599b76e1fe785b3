//! The shapes used to display the seminars and the categories.
//!
//! Each view is built from the database rows, and is never converted back.

use chrono::NaiveDateTime;
use entity::{categories, seminars};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::{
    form::{FieldErrors, SeminarForm},
    time::format_date_and_time,
};

/// A seminar, as shown in the listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarInfo {
    /// The seminar ID.
    pub id: i32,
    /// The topic of the seminar.
    pub topic: String,
    /// The name of the lecturer.
    pub lecturer: String,
    /// The formatted date and time of the seminar.
    pub date_and_time: String,
    /// The username of the organizer.
    pub organizer: String,
    /// The name of the category.
    pub category: String,
}

/// A seminar with all its information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarDetails {
    /// The seminar ID.
    pub id: i32,
    /// The topic of the seminar.
    pub topic: String,
    /// The name of the lecturer.
    pub lecturer: String,
    /// The formatted date and time of the seminar.
    pub date_and_time: String,
    /// The username of the organizer.
    pub organizer: String,
    /// The name of the category.
    pub category: String,
    /// The duration of the seminar, in minutes.
    pub duration: i32,
    /// The description of the seminar.
    pub details: String,
}

/// A seminar, as shown before its deletion is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarDelete {
    /// The seminar ID.
    pub id: i32,
    /// The topic of the seminar.
    pub topic: String,
    /// The formatted date and time of the seminar.
    pub date_and_time: String,
}

/// A category, as shown in the category selector of the forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// The category ID.
    pub id: i32,
    /// The category name.
    pub name: String,
}

/// A seminar form, with the available categories and the errors of the last submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeminarFormView {
    /// The ID of the edited seminar. It is empty when creating a seminar.
    pub id: Option<i32>,
    /// The values of the form.
    pub form: SeminarForm,
    /// The categories the user can choose from.
    pub categories: Vec<CategoryInfo>,
    /// The error messages bound to each field.
    pub errors: FieldErrors,
}

#[derive(FromQueryResult)]
pub(crate) struct SeminarInfoRow {
    pub id: i32,
    pub topic: String,
    pub lecturer: String,
    pub date_and_time: NaiveDateTime,
    pub organizer: String,
    pub category: String,
}

impl From<SeminarInfoRow> for SeminarInfo {
    fn from(row: SeminarInfoRow) -> Self {
        Self {
            id: row.id,
            topic: row.topic,
            lecturer: row.lecturer,
            date_and_time: format_date_and_time(&row.date_and_time),
            organizer: row.organizer,
            category: row.category,
        }
    }
}

#[derive(FromQueryResult)]
pub(crate) struct SeminarDetailsRow {
    pub id: i32,
    pub topic: String,
    pub lecturer: String,
    pub date_and_time: NaiveDateTime,
    pub organizer: String,
    pub category: String,
    pub duration: i32,
    pub details: String,
}

impl From<SeminarDetailsRow> for SeminarDetails {
    fn from(row: SeminarDetailsRow) -> Self {
        Self {
            id: row.id,
            topic: row.topic,
            lecturer: row.lecturer,
            date_and_time: format_date_and_time(&row.date_and_time),
            organizer: row.organizer,
            category: row.category,
            duration: row.duration,
            details: row.details,
        }
    }
}

impl From<&seminars::Model> for SeminarDelete {
    fn from(seminar: &seminars::Model) -> Self {
        Self {
            id: seminar.id,
            topic: seminar.topic.clone(),
            date_and_time: format_date_and_time(&seminar.date_and_time),
        }
    }
}

impl From<categories::Model> for CategoryInfo {
    fn from(category: categories::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl SeminarFormView {
    /// Returns the view of a form, without any error.
    pub fn new(id: Option<i32>, form: SeminarForm, categories: Vec<CategoryInfo>) -> Self {
        Self {
            id,
            form,
            categories,
            errors: FieldErrors::default(),
        }
    }

    /// Returns the view of a rejected form.
    pub fn with_errors(
        id: Option<i32>,
        form: SeminarForm,
        categories: Vec<CategoryInfo>,
        errors: FieldErrors,
    ) -> Self {
        Self {
            id,
            form,
            categories,
            errors,
        }
    }
}
