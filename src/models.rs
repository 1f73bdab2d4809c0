use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const MIN_RELEASE_DATE: Date = Date::constant(1895, 12, 28);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, message = "name cannot be blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "description cannot exceed 200 characters"))]
    pub description: String,
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: Date,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i32,
    pub mpa: Mpa,
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
    #[serde(default)]
    pub likes: HashSet<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mpa {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

// genre identity is the reference id; the name rides along for display
impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

impl PartialOrd for Genre {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Genre {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Genre {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(custom(function = "validate_login"))]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[validate(custom(function = "validate_birthday"))]
    pub birthday: Date,
    #[serde(default)]
    pub friends: HashSet<i64>,
}

fn validate_release_date(value: &Date) -> Result<(), ValidationError> {
    if *value < MIN_RELEASE_DATE {
        return Err(ValidationError::new("release_date_too_early")
            .with_message("release date predates the first film screening".into()));
    }
    let today: Date = jiff::Zoned::now().into();
    if *value > today {
        return Err(ValidationError::new("release_date_in_future")
            .with_message("release date cannot be in the future".into()));
    }
    Ok(())
}

fn validate_login(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("invalid_login")
            .with_message("login cannot be blank or contain whitespace".into()));
    }
    Ok(())
}

fn validate_birthday(value: &Date) -> Result<(), ValidationError> {
    let today: Date = jiff::Zoned::now().into();
    if *value >= today {
        return Err(ValidationError::new("birthday_in_future")
            .with_message("birthday must be in the past".into()));
    }
    Ok(())
}
