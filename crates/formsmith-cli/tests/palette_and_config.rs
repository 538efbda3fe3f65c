use assert_cmd::Command;
use formsmith_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_palette_lists_kinds_and_validations() {
    let world = TestWorld::new();

    let result = world.run(&["palette"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.starts_with("Field kinds\n"));
    assert!(out.contains("New textarea field"));
    assert!(out.contains("Regex (letters only)"));
    assert!(out.contains("up to 3 columns"));
}

#[test]
fn test_palette_json() {
    let world = TestWorld::new();

    let json = world
        .run(&["--format", "json", "palette"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["kinds"].as_array().unwrap().len(), 7);
    assert_eq!(json["kinds"][2]["kind"], "select");
    assert_eq!(json["kinds"][2]["has_options"], true);
    assert_eq!(json["validations"][0]["rule"], serde_json::Value::Null);
    assert_eq!(
        json["validations"][3]["rule"],
        "z.number({ invalid_type_error: \"Must be a number\" })"
    );
    assert_eq!(json["layouts"][1]["max_columns"], 2);
}

#[test]
fn test_config_show_defaults() {
    let world = TestWorld::new();

    let result = world.run(&["config", "show"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("(not created, defaults)"));
    assert!(result.stdout().contains("default_layout = \"single\""));
    assert!(result.stdout().contains("component_name = \"GeneratedForm\""));
}

#[test]
fn test_config_init_then_refuse_overwrite() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success(), "init failed: {}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("already exists"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new()
        .with_script("form.fs", "add text\n")
        .with_config("[preview]\nmedium_breakpoint = 2000\nlarge_breakpoint = 1000\n");

    let result = world.run(&["run", "form.fs"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("medium_breakpoint"));
}

#[test]
fn test_config_env_var_is_honoured() {
    let world = TestWorld::new();
    let config = world.path("env.toml");
    std::fs::write(&config, "[codegen]\ncomponent_name = \"EnvForm\"\n").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("formsmith").unwrap();
    cmd.current_dir(world.root())
        .env("FORMSMITH_CONFIG", &config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("component_name = \"EnvForm\""));
}

#[test]
fn test_edit_requires_terminal() {
    let world = TestWorld::new();

    let result = world.run(&["edit"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
}
