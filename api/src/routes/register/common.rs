use db::models::account::NewAccount;
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

/// Registration body. Every field must be present; nothing else is checked.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
    #[validate(required(message = "phone is required"))]
    #[serde(default, deserialize_with = "lenient_number")]
    pub phone: Option<f64>,
}

impl RegisterRequest {
    /// Call after `validate()` has passed.
    pub fn into_account(self) -> NewAccount {
        NewAccount {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        }
    }
}

/// A JSON number or a numeric string. Blank strings count as missing.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{s}` is not a number"))),
    }
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    #[serde(rename = "userId")]
    pub user_id: String,
}
