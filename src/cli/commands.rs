use anyhow::{bail, Result};
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Password, Text};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::sync::Arc;

use crate::config::config::Config;
use crate::core::generator::{DefaultPasswordGenerator, SystemRng};
use crate::core::ports::{GenPolicy, PasswordGenerator, Rng};
use crate::core::store::RecordStore;
use crate::term;

// Prompt validator shared with the menu: blank input re-prompts.
pub(crate) fn required(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Can't be empty!".into()))
    } else {
        Ok(Validation::Valid)
    }
}

// Options for the add command, constructed by the CLI layer
#[derive(Debug, Clone)]
pub struct AddOptions {
    pub account: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub generate: bool,
    pub length: Option<u16>,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
}

pub struct App<'a> {
    config: &'a Config,
}

impl<'a> App<'a> {
    pub fn create(config: &'a Config) -> Self {
        App { config }
    }

    fn open_store(&self) -> Result<RecordStore> {
        Ok(RecordStore::open(self.config.store_path.clone())?)
    }

    pub fn handle_add(&self, opts: AddOptions) -> Result<()> {
        let mut store = self.open_store()?;

        let account = match opts.account.clone() {
            Some(a) => a,
            None => Text::new("Account name (e.g. Gmail)")
                .with_validator(required)
                .prompt()?,
        };
        let account = account.trim().to_string();
        if account.is_empty() {
            bail!("account name must not be empty");
        }
        if store.get(&account).is_some() {
            bail!("account '{}' already exists", account);
        }

        let username = match opts.user.clone() {
            Some(u) => u,
            None => Text::new("Username/email")
                .with_validator(required)
                .prompt()?,
        };

        let password = if opts.generate {
            let mut policy = GenPolicy {
                upper: !opts.no_upper,
                digits: !opts.no_digits,
                special: !opts.no_special,
                ..GenPolicy::default()
            };
            policy.length = opts
                .length
                .or(self.config.generator_length)
                .unwrap_or(GenPolicy::default().length);
            let rng: Arc<dyn Rng> = Arc::new(SystemRng);
            let generated = DefaultPasswordGenerator::new(rng).generate(&policy)?;
            // Shown exactly once; there is no other way to learn what was stored.
            term::info(&format!("Your password: {}", generated.expose_secret()));
            generated
        } else if let Some(p) = opts.password.clone() {
            SecretString::new(p.into())
        } else {
            let p = Password::new("Password").with_validator(required).prompt()?;
            SecretString::new(p.into())
        };

        if store.add(&account, &username, password)? {
            term::success("Password added!");
            Ok(())
        } else {
            bail!("account '{}' already exists", account)
        }
    }

    pub fn handle_show(&self, account: &str, reveal: bool) -> Result<()> {
        let store = self.open_store()?;
        match store.get(account) {
            Some(record) => {
                term::record_card(record, reveal);
                Ok(())
            }
            None => bail!("account '{}' not found", account),
        }
    }

    pub fn handle_list(&self, json_mode: bool) -> Result<()> {
        let store = self.open_store()?;

        if json_mode {
            // Machine-readable listing, free of password material
            let items: Vec<serde_json::Value> = store
                .list()
                .iter()
                .map(|r| {
                    json!({
                        "account": r.account,
                        "username": r.username,
                        "created_date": r.created_date,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        if store.is_empty() {
            term::info("No passwords saved yet!");
            return Ok(());
        }
        println!("{}", term::records_table(store.list()));
        Ok(())
    }

    pub fn handle_update(
        &self,
        account: &str,
        old_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<()> {
        let mut store = self.open_store()?;

        let old = match old_password {
            Some(p) => p,
            None => Password::new("Current password")
                .without_confirmation()
                .with_validator(required)
                .prompt()?,
        };
        let new = match new_password {
            Some(p) => p,
            None => Password::new("New password").with_validator(required).prompt()?,
        };

        if store.update_secure(account, &old, SecretString::new(new.into()))? {
            term::success("Password updated!");
            Ok(())
        } else {
            // Not-found and wrong-password are indistinguishable on purpose
            bail!("wrong password or unknown account '{}'", account)
        }
    }

    pub fn handle_delete(&self, account: &str, yes: bool) -> Result<()> {
        let mut store = self.open_store()?;
        if store.get(account).is_none() {
            bail!("account '{}' not found", account);
        }

        if !yes {
            let msg = format!("Delete '{account}'?");
            let proceed = Confirm::new(&msg).with_default(false).prompt()?;
            if !proceed {
                term::warn("Deletion cancelled.");
                return Ok(());
            }
        }

        if store.delete(account)? {
            term::success("Password deleted!");
            Ok(())
        } else {
            bail!("account '{}' not found", account)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace_input() {
        assert!(matches!(required("Gmail"), Ok(Validation::Valid)));
        assert!(matches!(required(""), Ok(Validation::Invalid(_))));
        assert!(matches!(required("   "), Ok(Validation::Invalid(_))));
    }
}
