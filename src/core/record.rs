use chrono::{Local, NaiveDate};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored credential. `account` is the case-insensitive unique key
/// across the store; `created_date` is stamped once and never changes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Record {
    pub account: String,
    pub username: String,
    #[serde(with = "crate::core::secret_serde")]
    pub password: SecretString,
    pub created_date: NaiveDate,
}

impl Record {
    pub fn new(
        account: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            account: account.into(),
            username: username.into(),
            password,
            created_date: Local::now().date_naive(),
        }
    }

    /// Mask run matching the password's character length.
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.expose_secret().chars().count())
    }
}

// Masked form; the raw secret is only reachable through expose_secret().
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {}\nUsername: {}\nPassword: {}\nCreated: {}",
            self.account,
            self.username,
            self.masked_password(),
            self.created_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_masks_the_password() {
        let r = Record::new("Gmail", "me@x.com", SecretString::new("hunter2".into()));
        let shown = r.to_string();
        assert!(shown.contains("Password: *******"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn mask_length_tracks_character_count() {
        let r = Record::new("a", "b", SecretString::new("pässword".into()));
        assert_eq!(r.masked_password(), "********");
    }

    #[test]
    fn created_date_survives_round_trip_verbatim() {
        let json = r#"{
            "account": "Old",
            "username": "u",
            "password": "p",
            "created_date": "2019-03-07"
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.created_date, NaiveDate::from_ymd_opt(2019, 3, 7).unwrap());
        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["created_date"], "2019-03-07");
    }
}
