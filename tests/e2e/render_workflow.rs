use httpmock::prelude::*;

use super::fixture::{SAMPLE_SKILLS, TestFixture};

#[test]
fn render_local_file_as_html() {
    let fixture = TestFixture::with_sample("render_file");
    let source = fixture.store_path.display().to_string();

    let output = fixture.run(&["render", "--source", &source]);
    output.assert_success();
    assert_eq!(output.stdout.matches("class=\"skill-item\"").count(), 6);
    assert!(output.stdout.contains("<span class=\"skill-level beginner\">Beginner</span>"));
    assert!(output.stdout.contains("<h3>DevOps &amp; Tools</h3>"));
}

#[test]
fn render_over_http_with_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_SKILLS);
    });
    let fixture = TestFixture::new("render_http");
    let url = server.url("/data/skills.json");

    let output = fixture.run(&["render", "--source", &url, "--filter", "PY", "--format", "json"]);
    output.assert_success();
    mock.assert();

    let json = output.json();
    assert_eq!(json["data"]["origin"]["kind"], "fetched");
    let categories = json["data"]["view"]["categories"].as_array().unwrap();
    let visible: Vec<&str> = categories
        .iter()
        .flat_map(|c| c["skills"].as_array().unwrap())
        .filter(|s| s["visible"] == true)
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(visible, ["Python"]);
    assert_eq!(categories[1]["visible"], true);
    assert_eq!(categories[0]["visible"], false);
}

#[test]
fn render_falls_back_when_server_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.json");
        then.status(500);
    });
    let fixture = TestFixture::new("render_fallback_http");
    let url = server.url("/skills.json");

    let output = fixture.run(&["-m", "render", "--source", &url]);
    output.assert_success();

    let json = output.json();
    assert_eq!(json["data"]["origin"]["kind"], "fallback");
    assert!(json["data"]["origin"]["reason"].as_str().unwrap().contains("500"));
    assert!(!json["data"]["view"]["categories"].as_array().unwrap().is_empty());
}

#[test]
fn render_falls_back_when_file_missing() {
    let fixture = TestFixture::new("render_fallback_file");

    let output = fixture.run(&["render", "--source", "missing.json"]);
    output.assert_success();
    assert!(output.stdout.contains("class=\"skill-item\""));
    assert!(output.stderr.contains("using built-in skills document"));
}
