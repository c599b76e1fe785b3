//! The input form of a seminar, used both to create and to edit a seminar.
//!
//! The form holds the values as they were submitted. Validating it produces either a
//! [`NewSeminar`], with typed values ready to be saved, or the [`FieldErrors`] to show
//! alongside the form when rendering it again.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use entity::{bounds::*, seminars};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    CategoryId, category,
    error::SeminarResult,
    time::{self, DATE_FORMAT},
};

/// The values submitted to create or edit a seminar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SeminarForm {
    /// The topic of the seminar.
    #[serde(default)]
    #[validate(length(min = SEMINAR_TOPIC_MIN_LEN, max = SEMINAR_TOPIC_MAX_LEN))]
    pub topic: String,
    /// The name of the lecturer.
    #[serde(default)]
    #[validate(length(min = SEMINAR_LECTURER_MIN_LEN, max = SEMINAR_LECTURER_MAX_LEN))]
    pub lecturer: String,
    /// The description of the seminar.
    #[serde(default)]
    #[validate(length(min = SEMINAR_DETAILS_MIN_LEN, max = SEMINAR_DETAILS_MAX_LEN))]
    pub details: String,
    /// The date and time of the seminar, in the [`DATE_FORMAT`] format.
    #[serde(default)]
    #[validate(custom(function = "validate_date_and_time"))]
    pub date_and_time: String,
    /// The duration of the seminar, in minutes.
    #[serde(default)]
    #[validate(range(min = SEMINAR_DURATION_MIN, max = SEMINAR_DURATION_MAX))]
    pub duration: i32,
    /// The ID of the category of the seminar.
    #[serde(default)]
    #[validate(required)]
    pub category_id: Option<i32>,
}

fn validate_date_and_time(date_and_time: &str) -> Result<(), ValidationError> {
    match time::parse_date_and_time(date_and_time) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date_format")),
    }
}

/// The values of a seminar, once validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSeminar {
    /// The topic of the seminar.
    pub topic: String,
    /// The name of the lecturer.
    pub lecturer: String,
    /// The description of the seminar.
    pub details: String,
    /// The date and time of the seminar.
    pub date_and_time: NaiveDateTime,
    /// The duration of the seminar, in minutes.
    pub duration: i32,
    /// The category of the seminar.
    pub category: CategoryId,
}

/// The error messages of a form, grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Adds an error message to the provided field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages bound to the provided field.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true if the provided field has at least one error.
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }
}

fn display_name(field: &str) -> &str {
    match field {
        "topic" => "Topic",
        "lecturer" => "Lecturer",
        "details" => "Details",
        "date_and_time" => "DateAndTime",
        "duration" => "Duration",
        "category_id" => "CategoryId",
        other => other,
    }
}

fn bounds_of(field: &str) -> Option<(i64, i64)> {
    let bounds = match field {
        "topic" => (SEMINAR_TOPIC_MIN_LEN as i64, SEMINAR_TOPIC_MAX_LEN as i64),
        "lecturer" => (
            SEMINAR_LECTURER_MIN_LEN as i64,
            SEMINAR_LECTURER_MAX_LEN as i64,
        ),
        "details" => (SEMINAR_DETAILS_MIN_LEN as i64, SEMINAR_DETAILS_MAX_LEN as i64),
        "duration" => (SEMINAR_DURATION_MIN as i64, SEMINAR_DURATION_MAX as i64),
        _ => return None,
    };
    Some(bounds)
}

fn message_for(field: &str, error: &ValidationError) -> String {
    let name = display_name(field);

    match (&*error.code, bounds_of(field)) {
        ("required", _) => format!("The field {name} is required"),
        ("length", Some((min, max))) => {
            format!("The field {name} must be between {min} and {max} characters long")
        }
        ("range", Some((min, max))) => format!("The value must be between {min} and {max}"),
        ("date_format", _) => format!("Invalid date! Format must be: {DATE_FORMAT}"),
        _ => format!("The field {name} is invalid"),
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, errors) in errors.field_errors() {
            let field = field.to_string();
            for error in errors {
                let message = message_for(&field, error);
                out.add(field.clone(), message);
            }
        }
        out
    }
}

impl SeminarForm {
    fn blank_fields(&self) -> impl Iterator<Item = &'static str> {
        [
            ("topic", &self.topic),
            ("lecturer", &self.lecturer),
            ("details", &self.details),
            ("date_and_time", &self.date_and_time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Checks the constraints of every field, without any database access.
    ///
    /// A blank text field only reports that it is required.
    pub fn to_new_seminar(&self) -> Result<NewSeminar, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };

        for field in self.blank_fields() {
            errors.0.insert(
                field.to_owned(),
                vec![format!("The field {} is required", display_name(field))],
            );
        }

        let date_and_time = time::parse_date_and_time(&self.date_and_time);

        match (date_and_time, self.category_id) {
            (Some(date_and_time), Some(category_id)) if errors.is_empty() => Ok(NewSeminar {
                topic: self.topic.clone(),
                lecturer: self.lecturer.clone(),
                details: self.details.clone(),
                date_and_time,
                duration: self.duration,
                category: CategoryId(category_id),
            }),
            _ => Err(errors),
        }
    }

    /// Checks the constraints of every field, and that the selected category exists.
    ///
    /// The outer result holds the database errors, the inner one the validation result.
    pub async fn check<C: ConnectionTrait>(
        &self,
        conn: &C,
    ) -> SeminarResult<Result<NewSeminar, FieldErrors>> {
        let checked = self.to_new_seminar();

        let category_missing = match self.category_id {
            Some(id) => !category::exists(conn, CategoryId(id)).await?,
            None => false,
        };
        if !category_missing {
            return Ok(checked);
        }

        let mut errors = checked.err().unwrap_or_default();
        errors.add("category_id", "Category does not exist");
        Ok(Err(errors))
    }
}

impl From<&seminars::Model> for SeminarForm {
    fn from(seminar: &seminars::Model) -> Self {
        Self {
            topic: seminar.topic.clone(),
            lecturer: seminar.lecturer.clone(),
            details: seminar.details.clone(),
            date_and_time: time::format_date_and_time(&seminar.date_and_time),
            duration: seminar.duration,
            category_id: Some(seminar.category_id),
        }
    }
}
