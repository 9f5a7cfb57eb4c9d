use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use crossterm::style::Stylize;
use secrecy::ExposeSecret;

use crate::core::record::Record;

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "[ERROR]".red());
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "[WARNING]".yellow());
}

pub fn info(msg: &str) {
    println!("{} {msg}", "[INFO]".blue());
}

pub fn success(msg: &str) {
    println!("{} {msg}", "[SUCCESS]".green());
}

pub fn heading(msg: &str) {
    println!("{}", msg.cyan().bold());
}

/// Accounts as a bordered table; passwords never appear here.
pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Account").add_attribute(Attribute::Bold),
        Cell::new("Username").add_attribute(Attribute::Bold),
        Cell::new("Created").add_attribute(Attribute::Bold),
    ]);
    for r in records {
        table.add_row(vec![
            r.account.clone(),
            r.username.clone(),
            r.created_date.to_string(),
        ]);
    }
    table
}

/// One record, password masked unless `reveal` is set.
pub fn record_card(record: &Record, reveal: bool) {
    println!("Account:  {}", record.account);
    println!("Username: {}", record.username);
    if reveal {
        println!("Password: {}", record.password.expose_secret());
    } else {
        println!(
            "Password: {} (use --reveal to show)",
            record.masked_password()
        );
    }
    println!("Created:  {}", record.created_date);
}
