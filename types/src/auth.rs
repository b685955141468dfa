//! Login and signup forms.
//!
//! Nothing here checks credentials. Submitting either form fabricates a
//! [`UserProfile`] once the fields pass the same checks the browser applies
//! through `required` and `type="email"`.

use secrecy::{ExposeSecret, SecretString};

use crate::{AgeGroup, Result, SkinType, UserProfile, config::CONFIG, err};

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn authenticate(self) -> Result<UserProfile> {
        let email = required_email(&self.email)?;
        required("Password", self.password.expose_secret())?;

        let defaults = &CONFIG.login_defaults;
        Ok(UserProfile {
            name: defaults.name.clone(),
            email,
            skin_type: defaults.skin_type,
            age_group: defaults.age_group,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub skin_type: SkinType,
    pub age_group: AgeGroup,
}

impl SignupForm {
    pub fn authenticate(self) -> Result<UserProfile> {
        let name = required("Full Name", &self.name)?;
        let email = required_email(&self.email)?;
        required("Password", self.password.expose_secret())?;

        Ok(UserProfile {
            name,
            email,
            skin_type: self.skin_type,
            age_group: self.age_group,
        })
    }
}

/// Like the `required` attribute: only an empty value is missing.
fn required(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(err!("{field} is required"));
    }
    Ok(value.to_string())
}

/// Browsers strip surrounding whitespace from `type="email"` values.
fn required_email(value: &str) -> Result<String> {
    let email = required("Email", value.trim())?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(err!("'{email}' is not a valid email address")),
    }
}
