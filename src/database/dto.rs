//! Data transfer objects for the JSON API.
//!
//! Create payloads double as full-replace (PUT) payloads. Patch payloads
//! use Option<Option<T>> on nullable columns to tell "field not provided"
//! apart from "field explicitly set to null".

use serde::{Deserialize, Deserializer, Serialize};

/// Helper for deserializing into Option<Option<T>>.
/// Distinguishes "field absent" from "field explicitly set to null".
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

// ==================== rating handling ====================

/// Parses a rating from text, accepting both comma and dot as the
/// decimal separator.
pub fn parse_rating(raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| "rating must be a number".to_string())
}

/// Checks the 1..=10 range and rounds to one decimal place.
pub fn validate_rating(value: f64) -> Result<f64, String> {
    if !(1.0..=10.0).contains(&value) {
        return Err("rating must be between 1 and 10".to_string());
    }
    Ok((value * 10.0).round() / 10.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Num(f64),
    Text(String),
}

/// Accepts a rating as a JSON number or as a string like "8,6" / "8.6".
fn rating_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawRating::deserialize(deserializer)? {
        RawRating::Num(n) => Ok(n),
        RawRating::Text(s) => parse_rating(&s).map_err(serde::de::Error::custom),
    }
}

fn opt_rating_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(rating_value(deserializer)?))
}

// ==================== text helpers ====================

/// Trims a required text field in place, recording an error when blank.
fn require_text(value: &mut String, field: &str, errors: &mut Vec<String>) {
    *value = value.trim().to_string();
    if value.is_empty() {
        errors.push(format!("{field} must not be empty"));
    }
}

/// Trims an optional text field; a blank value becomes null.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_email(email: &str, errors: &mut Vec<String>) {
    // shape check only, not full address validation
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        errors.push("email must be a valid address".to_string());
    }
}

fn check_password(password: &str, errors: &mut Vec<String>) {
    if password.chars().count() < 8 {
        errors.push("password must be at least 8 characters long".to_string());
    }
    if password.contains(' ') {
        errors.push("password must not contain spaces".to_string());
    }
}

// ==================== genres ====================

/// Payload for creating a genre, also used for full updates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateGenreData {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl CreateGenreData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        require_text(&mut self.name, "name", &mut errors);
        require_text(&mut self.description, "description", &mut errors);
        self.image_url = optional_text(self.image_url);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Partial-update payload for a genre.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateGenreData {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

impl UpdateGenreData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if let Some(ref mut name) = self.name {
            require_text(name, "name", &mut errors);
        }
        if let Some(ref mut description) = self.description {
            require_text(description, "description", &mut errors);
        }
        self.image_url = self.image_url.map(optional_text);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

// ==================== developers ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateDeveloperData {
    pub name: String,
    pub image_url: Option<String>,
}

impl CreateDeveloperData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        require_text(&mut self.name, "name", &mut errors);
        self.image_url = optional_text(self.image_url);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateDeveloperData {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

impl UpdateDeveloperData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if let Some(ref mut name) = self.name {
            require_text(name, "name", &mut errors);
        }
        self.image_url = self.image_url.map(optional_text);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

// ==================== videogames ====================

/// Payload for creating a videogame, also used for full updates.
///
/// Genre and developer references stay optional; the handlers reject
/// references to rows that do not exist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateVideogameData {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub genre_id: Option<i32>,
    pub developer_id: Option<i32>,
}

impl CreateVideogameData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        require_text(&mut self.title, "title", &mut errors);
        self.description = optional_text(self.description);
        self.cover_url = optional_text(self.cover_url);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Partial-update payload for a videogame. An explicit null detaches the
/// genre or developer reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateVideogameData {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub genre_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub developer_id: Option<Option<i32>>,
}

impl UpdateVideogameData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if let Some(ref mut title) = self.title {
            require_text(title, "title", &mut errors);
        }
        self.description = self.description.map(optional_text);
        self.cover_url = self.cover_url.map(optional_text);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

// ==================== users ====================

/// Payload for creating a user, also used for full updates.
/// The plaintext password never reaches the database; callers hash it
/// before insert.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserData {
    pub nick: String,
    pub email: String,
    pub nif: Option<String>,
    pub password: String,
}

impl CreateUserData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        require_text(&mut self.nick, "nick", &mut errors);
        require_text(&mut self.email, "email", &mut errors);
        if !self.email.is_empty() {
            check_email(&self.email, &mut errors);
        }
        check_password(&self.password, &mut errors);
        self.nif = optional_text(self.nif);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Partial-update payload for a user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateUserData {
    pub nick: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub nif: Option<Option<String>>,
    pub password: Option<String>,
}

impl UpdateUserData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if let Some(ref mut nick) = self.nick {
            require_text(nick, "nick", &mut errors);
        }
        if let Some(ref mut email) = self.email {
            require_text(email, "email", &mut errors);
            if !email.is_empty() {
                check_email(email, &mut errors);
            }
        }
        if let Some(ref password) = self.password {
            check_password(password, &mut errors);
        }
        self.nif = self.nif.map(optional_text);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

// ==================== reviews ====================

/// Payload for creating a review, also used for full updates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateReviewData {
    #[serde(deserialize_with = "rating_value")]
    pub rating: f64,
    pub comment: Option<String>,
    pub user_id: i32,
    pub videogame_id: i32,
}

impl CreateReviewData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        match validate_rating(self.rating) {
            Ok(rating) => self.rating = rating,
            Err(e) => errors.push(e),
        }
        self.comment = optional_text(self.comment);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Partial-update payload for a review.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateReviewData {
    #[serde(default, deserialize_with = "opt_rating_value")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub comment: Option<Option<String>>,
    pub user_id: Option<i32>,
    pub videogame_id: Option<i32>,
}

impl UpdateReviewData {
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        if let Some(rating) = self.rating {
            match validate_rating(rating) {
                Ok(rating) => self.rating = Some(rating),
                Err(e) => errors.push(e),
            }
        }
        self.comment = self.comment.map(optional_text);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rating_accepts_comma_and_dot() {
        assert_eq!(parse_rating("8,6").unwrap(), 8.6);
        assert_eq!(parse_rating("8.6").unwrap(), 8.6);
        assert_eq!(parse_rating(" 7 ").unwrap(), 7.0);
        assert!(parse_rating("not a number").is_err());
    }

    #[test]
    fn rating_range_is_inclusive() {
        assert_eq!(validate_rating(1.0).unwrap(), 1.0);
        assert_eq!(validate_rating(10.0).unwrap(), 10.0);
        assert!(validate_rating(0.0).is_err());
        assert!(validate_rating(0.9).is_err());
        assert!(validate_rating(10.1).is_err());
        assert!(validate_rating(11.0).is_err());
    }

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(validate_rating(8.649).unwrap(), 8.6);
        assert_eq!(validate_rating(8.65).unwrap(), 8.7);
    }

    #[test]
    fn review_rating_deserializes_from_number_or_string() {
        let from_number: CreateReviewData =
            serde_json::from_str(r#"{"rating": 8.6, "user_id": 1, "videogame_id": 1}"#).unwrap();
        assert_eq!(from_number.rating, 8.6);

        let from_comma: CreateReviewData =
            serde_json::from_str(r#"{"rating": "8,6", "user_id": 1, "videogame_id": 1}"#).unwrap();
        assert_eq!(from_comma.rating, 8.6);
    }

    #[test]
    fn genre_requires_name_and_description() {
        let blank = CreateGenreData {
            name: "   ".to_string(),
            description: "Action games".to_string(),
            image_url: None,
        };
        let errors = blank.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("name")));

        let ok = CreateGenreData {
            name: " Action ".to_string(),
            description: "Action games".to_string(),
            image_url: Some("  ".to_string()),
        };
        let validated = ok.validate().unwrap();
        assert_eq!(validated.name, "Action");
        assert_eq!(validated.image_url, None);
    }

    #[test]
    fn user_password_rules() {
        let user = CreateUserData {
            nick: "player1".to_string(),
            email: "player1@hotmail.es".to_string(),
            nif: Some("  ".to_string()),
            password: "short".to_string(),
        };
        let errors = user.clone().validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("8 characters")));

        let spaced = CreateUserData {
            password: "pass word 123".to_string(),
            ..user.clone()
        };
        let errors = spaced.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("spaces")));

        let valid = CreateUserData {
            password: "player1234".to_string(),
            ..user
        };
        let validated = valid.validate().unwrap();
        assert_eq!(validated.nif, None);
    }

    #[test]
    fn patch_tells_absent_from_null() {
        let absent: UpdateGenreData = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.image_url, None);

        let null: UpdateGenreData = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert_eq!(null.image_url, Some(None));

        let set: UpdateGenreData = serde_json::from_str(r#"{"image_url": "cover.png"}"#).unwrap();
        assert_eq!(set.image_url, Some(Some("cover.png".to_string())));
    }
}
