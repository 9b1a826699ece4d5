//! Integration tests for cacheopts

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    const DEFAULTS: &str = "type=build;format=volume;name=;type=launch;format=volume;name=;";

    fn cacheopts() -> Command {
        let mut cmd = cargo_bin_cmd!("cacheopts");
        cmd.env_remove("CACHEOPTS_CONFIG");
        cmd
    }

    fn resolve() -> Command {
        let mut cmd = cacheopts();
        cmd.args(["--no-config", "resolve"]);
        cmd
    }

    fn resolve_plain() -> Command {
        let mut cmd = resolve();
        cmd.args(["--format", "plain"]);
        cmd
    }

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn help_displays() {
        cacheopts()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Build and launch cache options"));
    }

    #[test]
    fn version_displays() {
        cacheopts()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cacheopts"));
    }

    #[test]
    fn resolve_prints_table_by_default() {
        resolve()
            .assert()
            .success()
            .stdout(predicate::str::contains("ROLE"))
            .stdout(predicate::str::contains("FORMAT"))
            .stdout(predicate::str::contains("type=build").not());
    }

    #[test]
    fn resolve_defaults() {
        resolve_plain()
            .assert()
            .success()
            .stdout(format!("{DEFAULTS}\n"));
    }

    #[test]
    fn resolve_build_image_cache() {
        let cache = "type=build;format=image;name=io.test.io/myorg/my-cache:build";
        let expected = "type=build;format=image;name=io.test.io/myorg/my-cache:build;\
                        type=launch;format=volume;name=;\n";

        resolve_plain()
            .args(["--cache", cache])
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn resolve_repeated_flags() {
        resolve_plain()
            .args([
                "--cache",
                "type=build;format=image;name=a",
                "--cache",
                "type=launch;format=volume;name=b",
            ])
            .assert()
            .success()
            .stdout("type=build;format=image;name=a;type=launch;format=volume;name=b;\n");
    }

    #[test]
    fn resolve_later_flag_replaces_role() {
        resolve_plain()
            .args(["--cache", "type=build;format=image;name=a", "--cache", "type=build"])
            .assert()
            .success()
            .stdout(format!("{DEFAULTS}\n"));
    }

    #[test]
    fn resolve_missing_name() {
        resolve()
            .args(["--cache", "format=image"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cache 'name' is required"));
    }

    #[test]
    fn resolve_malformed_field() {
        resolve()
            .args(["--cache", "launch;format=image;name=x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "invalid field 'launch' must be a key=value pair",
            ));
    }

    #[test]
    fn resolve_json() {
        resolve()
            .args(["--cache", "type=launch;name=vol", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"role\": \"launch\""))
            .stdout(predicate::str::contains("\"name\": \"vol\""));
    }

    #[test]
    fn resolve_table_with_image() {
        resolve()
            .args(["--image", "my/app", "--format", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ROLE"))
            .stdout(predicate::str::contains("pack-cache-my_app-"));
    }

    #[test]
    fn config_defaults_are_overridden_per_role() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
                [cache]
                defaults = ["type=build;name=cfg-build", "type=launch;name=cfg-launch"]
            "#,
        );

        let expected = "type=build;format=volume;name=cfg-build;\
                        type=launch;format=image;name=reg/launch;\n";

        cacheopts()
            .arg("--config")
            .arg(&path)
            .args(["resolve", "--format", "plain"])
            .args(["--cache", "type=launch;format=image;name=reg/launch"])
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn invalid_config_default_fails() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[cache]\ndefaults = [\"type=nope\"]\n");

        cacheopts()
            .arg("--config")
            .arg(&path)
            .arg("resolve")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid cache type 'nope'"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        cacheopts()
            .arg("--config")
            .arg(&path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        cacheopts()
            .args(["--no-config", "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("[cache]"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        cacheopts()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote default configuration"));

        assert!(path.exists());
    }

    #[test]
    fn debug_logs_config_loading() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[cache]\ndefaults = [\"type=launch;name=x\"]\n");

        cacheopts()
            .arg("-vv")
            .arg("--config")
            .arg(&path)
            .arg("resolve")
            .assert()
            .success()
            .stderr(predicate::str::contains("Loaded config from"))
            .stderr(predicate::str::contains("1 cache default(s)"));
    }

    #[test]
    fn json_log_format_from_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[general]\nlog_format = \"json\"\n");

        cacheopts()
            .arg("-vv")
            .arg("--config")
            .arg(&path)
            .args(["resolve", "--cache", "type=launch;name=x"])
            .assert()
            .success()
            .stderr(predicate::str::contains("\"level\":\"DEBUG\""))
            .stderr(predicate::str::contains("Cache launch set to volume"));
    }
}
