use insta::assert_snapshot;
use regex::Regex;

use super::fixture::TestFixture;

const TWO_SKILLS: &str = r#"{
  "skillCategories": [
    {
      "name": "Tools & <Misc>",
      "skills": [
        { "name": "Git", "level": 88, "description": "Rebase \"often\"" },
        { "name": "Make", "level": 40, "description": "" }
      ]
    }
  ],
  "lastUpdated": "2024-01-15"
}"#;

fn sanitize_dates(text: &str) -> String {
    let date = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
    date.replace_all(text, "[DATE]").to_string()
}

#[test]
fn test_list_output_plain() {
    let fixture = TestFixture::with_sample("snapshot_list_plain");
    let output = fixture.run(&["--plain", "list"]);
    output.assert_success();

    assert_snapshot!(output.stdout.trim_end(), @r"
Current Skills:

Frontend:
  [+++] JavaScript: 95% - ES6+, async patterns, DOM APIs
  [++ ] CSS: 80% - Flexbox, Grid, animations

Backend:
  [++ ] Node.js: 85% - Express, REST APIs
  [++ ] Python: 75% - Scripting and automation

DevOps & Tools:
  [++ ] Git: 88% - Branching strategies, rebasing
  [+  ] Docker: 55% - Container basics

Last updated: 2024-01-15
");
}

#[test]
fn test_add_then_list_plain() {
    let fixture = TestFixture::with_sample("snapshot_add_list");

    let add = fixture.run(&["--plain", "add", "Rust", "90", "Backend"]);
    add.assert_success();
    assert_snapshot!(add.stdout.trim_end(), @r#"
Skills data updated successfully!
Added "Rust" to Backend category
"#);

    let list = fixture.run(&["--plain", "list"]);
    list.assert_success();
    let backend: String = sanitize_dates(&list.stdout)
        .lines()
        .skip_while(|line| *line != "Backend:")
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(backend, @r"
Backend:
  [+++] Rust: 90% - Professional experience with Rust
  [++ ] Node.js: 85% - Express, REST APIs
  [++ ] Python: 75% - Scripting and automation
");
    assert!(sanitize_dates(&list.stdout).ends_with("Last updated: [DATE]\n"));
}

#[test]
fn test_render_html_escaped() {
    let fixture = TestFixture::with_skills("snapshot_render_html", TWO_SKILLS);
    let source = fixture.store_path.display().to_string();

    let output = fixture.run(&["render", "--source", &source, "--filter", "git"]);
    output.assert_success();

    assert_snapshot!(output.stdout.trim_end(), @r#"
<div class="skill-category" data-category="tools &amp; &lt;misc&gt;">
  <h3>Tools &amp; &lt;Misc&gt;</h3>
  <div class="skill-item" data-skill="git">
    <div class="skill-header"><span class="skill-name">Git</span><span class="skill-level advanced">Advanced</span></div>
    <div class="skill-bar"><div class="skill-progress" style="width: 88%"></div></div>
    <p class="skill-description">Rebase &quot;often&quot;</p>
  </div>
  <div class="skill-item" data-skill="make" hidden>
    <div class="skill-header"><span class="skill-name">Make</span><span class="skill-level beginner">Beginner</span></div>
    <div class="skill-bar"><div class="skill-progress" style="width: 40%"></div></div>
    <p class="skill-description"></p>
  </div>
</div>
"#);
}
