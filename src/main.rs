use passbook::{cli, term};

fn main() {
    env_logger::init();
    if let Err(e) = cli::run() {
        term::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
