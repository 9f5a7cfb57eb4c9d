use clap::{Parser, Subcommand};

const PASSBOOK_LONG_VERSION: &str = concat!(
    "version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "git sha: ",
    env!("PASSBOOK_GIT_SHA"),
    "\n",
    "build time (UTC): ",
    env!("PASSBOOK_BUILD_TIME"),
    "\n",
    "target: ",
    env!("PASSBOOK_TARGET")
);

#[derive(Parser)]
#[command(
    name = "passbook",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PASSBOOK_LONG_VERSION,
    about = "🔑 passbook — local password manager"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new credential
    Add {
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
        /// Account name (prompted when omitted)
        #[arg(long)]
        account: Option<String>,
        /// Username value (prompted when omitted)
        #[arg(long)]
        user: Option<String>,
        /// Password value (hidden prompt when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Generate the password instead of prompting
        #[arg(long)]
        generate: bool,
        /// Generated password length
        #[arg(long)]
        length: Option<u16>,
        /// Disable uppercase letters in generation
        #[arg(long)]
        no_upper: bool,
        /// Disable digits in generation
        #[arg(long)]
        no_digits: bool,
        /// Disable special characters in generation
        #[arg(long)]
        no_special: bool,
    },
    /// Show one credential by account
    Show {
        account: String,
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
        /// Print the stored password in the clear
        #[arg(long)]
        reveal: bool,
    },
    /// List saved accounts (no passwords)
    List {
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
        /// Output a JSON array (no password material)
        #[arg(long)]
        json: bool,
    },
    /// Change a stored password, gated on the current one
    Update {
        account: String,
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
        /// Current password (hidden prompt when omitted)
        #[arg(long)]
        old_password: Option<String>,
        /// Replacement password (hidden prompt when omitted)
        #[arg(long)]
        new_password: Option<String>,
    },
    /// Delete a credential by account
    Delete {
        account: String,
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Interactive menu
    Menu {
        /// Store file path override
        #[arg(long)]
        path: Option<String>,
    },
}
