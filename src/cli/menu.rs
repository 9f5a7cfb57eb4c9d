use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Password, Select, Text};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;

use super::commands::required;
use crate::config::config::Config;
use crate::core::generator::{DefaultPasswordGenerator, SystemRng};
use crate::core::ports::{GenPolicy, PasswordGenerator, Rng, MIN_LENGTH};
use crate::core::store::RecordStore;
use crate::term;

#[derive(Copy, Clone, Debug)]
enum MenuAction {
    Add,
    Generate,
    View,
    List,
    Update,
    Delete,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Add => "Add new password",
            MenuAction::Generate => "Generate new password",
            MenuAction::View => "View password",
            MenuAction::List => "List all accounts",
            MenuAction::Update => "Update password",
            MenuAction::Delete => "Delete password",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

const ACTIONS: [MenuAction; 7] = [
    MenuAction::Add,
    MenuAction::Generate,
    MenuAction::View,
    MenuAction::List,
    MenuAction::Update,
    MenuAction::Delete,
    MenuAction::Quit,
];

/// Interactive loop over one open store. Recoverable failures (duplicates,
/// unknown accounts, wrong passwords) print a message and return to the
/// menu; persistence failures end the session.
pub fn run(config: &Config) -> Result<()> {
    let mut store = RecordStore::open(config.store_path.clone())?;
    term::heading("=== Password Manager ===");

    loop {
        let action = Select::new("Action", ACTIONS.to_vec()).prompt()?;
        match action {
            MenuAction::Add => add(&mut store)?,
            MenuAction::Generate => generate(&mut store, config)?,
            MenuAction::View => view(&store)?,
            MenuAction::List => list(&store),
            MenuAction::Update => update(&mut store)?,
            MenuAction::Delete => delete(&mut store)?,
            MenuAction::Quit => return Ok(()),
        }
    }
}

fn prompt_account(message: &str) -> Result<String> {
    let account = Text::new(message).with_validator(required).prompt()?;
    Ok(account.trim().to_string())
}

fn add(store: &mut RecordStore) -> Result<()> {
    let account = prompt_account("Account name (e.g. Gmail)")?;
    let username = Text::new("Username/email")
        .with_validator(required)
        .prompt()?;
    let password = Password::new("Password").with_validator(required).prompt()?;

    if store.add(&account, &username, SecretString::new(password.into()))? {
        term::info("Password added!");
    } else {
        term::error("Account already exists!");
    }
    Ok(())
}

fn generate(store: &mut RecordStore, config: &Config) -> Result<()> {
    let account = prompt_account("Account name (e.g. Gmail)")?;
    let username = Text::new("Username/email")
        .with_validator(required)
        .prompt()?;

    term::info("Let's generate a password...");
    let default_len = config.generator_length.unwrap_or(GenPolicy::default().length);
    let length = CustomType::<u16>::new("Desired password length")
        .with_default(default_len)
        .with_error_message("Enter a number.")
        .with_validator(valid_length)
        .prompt()?;
    let upper = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;
    let special = Confirm::new("Include special characters?")
        .with_default(true)
        .prompt()?;
    let digits = Confirm::new("Include digits?")
        .with_default(true)
        .prompt()?;

    let policy = GenPolicy {
        length,
        upper,
        digits,
        special,
    };
    let rng: Arc<dyn Rng> = Arc::new(SystemRng);
    let generated = DefaultPasswordGenerator::new(rng).generate(&policy)?;

    if store.add(&account, &username, generated.clone())? {
        term::success("Password generated and saved!");
        term::info(&format!("Your password: {}", generated.expose_secret()));
    } else {
        term::error("Account already exists!");
    }
    Ok(())
}

fn valid_length(input: &u16) -> Result<Validation, CustomUserError> {
    if *input >= MIN_LENGTH {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            "Password length must be at least 4 characters.".into(),
        ))
    }
}

fn view(store: &RecordStore) -> Result<()> {
    let account = prompt_account("Account to view")?;
    match store.get(&account) {
        Some(record) => term::record_card(record, true),
        None => term::error("Account not found!"),
    }
    Ok(())
}

fn list(store: &RecordStore) {
    if store.is_empty() {
        println!("No passwords saved yet!");
        return;
    }
    term::heading("=== All Accounts ===");
    println!("{}", term::records_table(store.list()));
}

fn update(store: &mut RecordStore) -> Result<()> {
    let account = prompt_account("Account to update")?;
    let old = Password::new("Current password")
        .without_confirmation()
        .with_validator(required)
        .prompt()?;
    let new = Password::new("New password").with_validator(required).prompt()?;

    if store.update_secure(&account, &old, SecretString::new(new.into()))? {
        term::info("Password updated!");
    } else {
        term::error("Wrong password, or account not found!");
    }
    Ok(())
}

fn delete(store: &mut RecordStore) -> Result<()> {
    let account = prompt_account("Account to delete")?;
    if store.get(&account).is_none() {
        term::error("Account not found!");
        return Ok(());
    }

    let proceed = Confirm::new(&format!("Delete '{account}'?"))
        .with_default(false)
        .prompt()?;
    if !proceed {
        term::warn("Deletion cancelled.");
        return Ok(());
    }

    if store.delete(&account)? {
        term::success("Password deleted!");
    }
    Ok(())
}
