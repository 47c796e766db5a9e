mod helpers;

use grandprix_cli::config::{self, CONFIG_ENV};
use helpers::Sandbox;
use serial_test::serial;
use std::fs;

#[test]
fn first_run_creates_config_and_save_directory() {
    let sandbox = Sandbox::new();
    let res = sandbox.run(&[]);
    assert_eq!(res.code, 0);
    assert!(sandbox.config_path().exists());
    assert!(sandbox.save_dir().is_dir());
}

#[test]
fn changes_survive_a_restart() {
    let sandbox = Sandbox::new();
    let elsewhere = sandbox.dir.path().join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();
    let sl = format!("sl {}", elsewhere.display());

    let res = sandbox.run(&["sa", "y", sl.as_str()]);
    assert!(res.out.contains("Auto save is now on"));
    assert!(res.out.contains("Save directory updated to"));
    let written = config::load(&sandbox.config_path()).unwrap();

    // Second run starts from the same file and changes nothing.
    sandbox.run(&[]);
    let reread = config::load(&sandbox.config_path()).unwrap();
    assert_eq!(reread, written);
    assert!(reread.auto_save);
    assert_eq!(reread.save_directory, elsewhere);
}

#[test]
fn auto_save_follows_the_answer() {
    let sandbox = Sandbox::new();
    let res = sandbox.run(&["sa", "y", "sa", "n"]);
    assert!(res.out.contains("Auto save is now on"));
    assert!(res.out.contains("Auto save is now off"));
    assert!(!config::load(&sandbox.config_path()).unwrap().auto_save);
}

#[test]
fn missing_save_directory_is_rejected() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("nope");
    let sl = format!("sl {}", missing.display());
    let res = sandbox.run(&[sl.as_str()]);
    assert!(res.err.contains("does not exist"));
    assert_eq!(
        config::load(&sandbox.config_path()).unwrap().save_directory,
        sandbox.save_dir()
    );
}

#[test]
fn save_dir_flag_is_not_persisted() {
    let sandbox = Sandbox::new();
    let scratch = sandbox.dir.path().join("scratch");
    let config = sandbox.config_path();
    let args = [
        "grandprix",
        "--config",
        config.to_str().unwrap(),
        "--save-dir",
        scratch.to_str().unwrap(),
    ];
    let res = sandbox.run_with_args(
        &args,
        &["tn", "Cup", "1", "n", "", "", "3", "", "", "", "", ""],
    );
    assert!(res.out.contains("Tournament has been created"), "{}", res.err);
    assert!(scratch.join("Cup.json").exists());
    assert_eq!(
        config::load(&config).unwrap().save_directory,
        sandbox.save_dir()
    );
}

#[test]
fn malformed_config_is_a_startup_failure() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "autoSave = [").unwrap();
    let res = sandbox.run(&["help"]);
    assert_eq!(res.code, 2);
    assert!(res.err.contains("Configuration error"));
    assert!(!res.out.contains("Grand Prix - Help"));
}

#[test]
#[serial]
fn environment_names_the_config_file() {
    let sandbox = Sandbox::new();
    let from_env = sandbox.dir.path().join("env.toml");
    unsafe { std::env::set_var(CONFIG_ENV, &from_env) };
    let res = sandbox.run_with_args(&["grandprix"], &[]);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(res.code, 0);
    assert!(from_env.exists());
    assert!(!sandbox.config_path().exists());
}
