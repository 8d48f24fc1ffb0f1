//! Advocate entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A roster record (Entity)
///
/// Serialized in camelCase because that is the shape the listing
/// endpoint has always returned (`firstName`, `yearsOfExperience`, ...).
/// `id` and `createdAt` are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: i64,
    pub phone_number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Advocate {
    /// Create an advocate with no specialties, zero experience and no phone number.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            degree: degree.into(),
            specialties: Vec::new(),
            years_of_experience: 0,
            phone_number: 0,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years_of_experience(mut self, years: i64) -> Self {
        self.years_of_experience = years;
        self
    }

    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// North American formatting for 10-digit numbers, plain digits otherwise.
    pub fn formatted_phone(&self) -> String {
        let digits = self.phone_number.to_string();
        if self.phone_number > 0 && digits.len() == 10 {
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
        } else {
            digits
        }
    }
}
