use passbook::config::config::Config;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_config_file(content: &str) {
    // Honor PASSBOOK_CONFIG_DIR to avoid cross-test interference
    let base = env::var("PASSBOOK_CONFIG_DIR").unwrap_or_else(|_| {
        dirs::config_dir()
            .expect("config_dir available")
            .to_string_lossy()
            .to_string()
    });
    let passbook_dir = PathBuf::from(base).join("passbook");
    let _ = fs::create_dir_all(&passbook_dir);
    let path = passbook_dir.join("config.toml");
    fs::write(path, content).expect("write config file");
}

#[test]
#[serial]
fn store_path_precedence_cli_over_env_and_file() {
    let td = tempdir().unwrap();
    // Isolate env
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    env::remove_var("PASSBOOK_STORE_PATH");

    write_config_file("store_path = \"/tmp/cfg_passwords.json\"\n");

    // Also set env var; CLI should still win
    env::set_var("PASSBOOK_STORE_PATH", "/tmp/env_passwords.json");
    let cli_path = PathBuf::from("/tmp/cli_passwords.json");
    let cfg = Config::create(Some(cli_path.clone()));
    assert_eq!(cfg.store_path, cli_path);
}

#[test]
#[serial]
fn store_path_precedence_env_over_file() {
    let td = tempdir().unwrap();
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    write_config_file("store_path = \"/tmp/cfg_passwords.json\"\n");
    // env overrides
    env::set_var("PASSBOOK_STORE_PATH", "/tmp/env_passwords.json");
    let cfg = Config::create(None);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/env_passwords.json"));
}

#[test]
#[serial]
fn store_path_precedence_file_over_default() {
    let td = tempdir().unwrap();
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    env::remove_var("PASSBOOK_STORE_PATH");
    write_config_file("store_path = \"/tmp/cfg_passwords.json\"\n");
    let cfg = Config::create(None);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/cfg_passwords.json"));
}

#[test]
#[serial]
fn default_store_path_uses_platform_data_dir() {
    let td = tempdir().unwrap();
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    env::remove_var("PASSBOOK_STORE_PATH");

    // Ensure no config file
    let _ = fs::remove_file(
        PathBuf::from(env::var("PASSBOOK_CONFIG_DIR").unwrap())
            .join("passbook")
            .join("config.toml"),
    );

    // Force data_dir to be deterministic via override
    let data_root = td.path().join("data");
    env::set_var("PASSBOOK_DATA_DIR", data_root.to_string_lossy().to_string());
    let cfg = Config::create(None);
    let expected = data_root.join("passbook").join("passwords.json");
    assert_eq!(cfg.store_path, expected);
    env::remove_var("PASSBOOK_DATA_DIR");
}

#[test]
#[serial]
fn generator_length_from_file_then_env_override() {
    let td = tempdir().unwrap();
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    env::remove_var("PASSBOOK_STORE_PATH");
    env::remove_var("PASSBOOK_GEN_LENGTH");

    // From file when env not set
    write_config_file("generator_length = 33\n");
    let cfg = Config::create(None);
    assert_eq!(cfg.generator_length, Some(33));

    // Env overrides file
    env::set_var("PASSBOOK_GEN_LENGTH", "24");
    let cfg2 = Config::create(None);
    assert_eq!(cfg2.generator_length, Some(24));
    env::remove_var("PASSBOOK_GEN_LENGTH");
}

#[test]
#[serial]
fn malformed_config_file_falls_back_to_defaults() {
    let td = tempdir().unwrap();
    env::set_var("HOME", td.path());
    env::set_var("PASSBOOK_CONFIG_DIR", td.path().join("cfg").to_string_lossy().to_string());
    env::remove_var("PASSBOOK_STORE_PATH");
    env::remove_var("PASSBOOK_GEN_LENGTH");

    write_config_file("store_path = [this is not toml\n");

    let data_root = td.path().join("data");
    env::set_var("PASSBOOK_DATA_DIR", data_root.to_string_lossy().to_string());
    let cfg = Config::create(None);
    assert_eq!(cfg.store_path, data_root.join("passbook").join("passwords.json"));
    assert_eq!(cfg.generator_length, None);
    env::remove_var("PASSBOOK_DATA_DIR");
}
