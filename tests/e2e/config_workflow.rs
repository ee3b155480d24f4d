use super::fixture::{SAMPLE_SKILLS, TestFixture};

#[test]
fn project_config_selects_store() {
    let fixture = TestFixture::new("config_store");
    std::fs::write(fixture.path("portfolio.json"), SAMPLE_SKILLS).unwrap();
    fixture.write_config("[store]\npath = \"portfolio.json\"\n");

    let output = fixture.run_raw(&["--plain", "list"], &[]);
    output.assert_success();
    assert!(output.stdout.contains("JavaScript: 95%"));
}

#[test]
fn env_store_overrides_config_and_flag_overrides_env() {
    let fixture = TestFixture::new("config_precedence");
    std::fs::write(fixture.path("from-env.json"), SAMPLE_SKILLS).unwrap();
    fixture.write_config("[store]\npath = \"missing.json\"\n");

    let env = fixture.run_raw(&["--plain", "list"], &[("SKILLBOOK_STORE", "from-env.json")]);
    env.assert_success();

    let flag = fixture.run_raw(
        &["--store", "nowhere.json", "--plain", "list"],
        &[("SKILLBOOK_STORE", "from-env.json")],
    );
    flag.assert_exit_code(1);
    assert!(flag.stderr.contains("nowhere.json"));
}

#[test]
fn clamp_policy_pulls_level_into_range() {
    let fixture = TestFixture::with_sample("clamp_policy");
    fixture.write_config("[levels]\npolicy = \"clamp\"\n");

    fixture.run(&["add", "Elixir", "150", "Backend"]).assert_success();

    let doc = fixture.store_json();
    assert_eq!(doc["skillCategories"][1]["skills"][0]["name"], "Elixir");
    assert_eq!(doc["skillCategories"][1]["skills"][0]["level"], 100);
}

#[test]
fn reject_policy_is_the_default() {
    let fixture = TestFixture::with_sample("reject_policy");
    let before = fixture.read_store();

    let output = fixture.run(&["add", "Elixir", "150", "Backend"]);
    output.assert_exit_code(1);
    assert!(output.stderr.contains("level 150 is outside 0-100"));
    assert_eq!(fixture.read_store(), before);
}

#[test]
fn explicit_missing_config_fails() {
    let fixture = TestFixture::with_sample("missing_config");

    let output = fixture.run(&["--config", "absent.toml", "list"]);
    output.assert_exit_code(1);
    assert!(output.stderr.contains("Config error"));
}

#[test]
fn render_source_from_env() {
    let fixture = TestFixture::new("render_env");
    std::fs::write(fixture.path("site.json"), SAMPLE_SKILLS).unwrap();

    let output = fixture.run_raw(
        &["-m", "render"],
        &[("SKILLBOOK_RENDER_SOURCE", "site.json")],
    );
    output.assert_success();
    assert_eq!(output.json()["data"]["origin"]["kind"], "fetched");
}
