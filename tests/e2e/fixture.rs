#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use tempfile::TempDir;

/// The legacy sample file, byte for byte as the old tool wrote it.
pub const SAMPLE_SKILLS: &str = r#"{
  "skillCategories": [
    {
      "name": "Frontend",
      "skills": [
        {
          "name": "JavaScript",
          "level": 95,
          "description": "ES6+, async patterns, DOM APIs"
        },
        {
          "name": "CSS",
          "level": 80,
          "description": "Flexbox, Grid, animations"
        }
      ]
    },
    {
      "name": "Backend",
      "skills": [
        {
          "name": "Node.js",
          "level": 85,
          "description": "Express, REST APIs"
        },
        {
          "name": "Python",
          "level": 75,
          "description": "Scripting and automation"
        }
      ]
    },
    {
      "name": "DevOps & Tools",
      "skills": [
        {
          "name": "Git",
          "level": 88,
          "description": "Branching strategies, rebasing"
        },
        {
          "name": "Docker",
          "level": 55,
          "description": "Container basics"
        }
      ]
    }
  ],
  "lastUpdated": "2024-01-15"
}"#;

const SKILLBOOK_ENV: &[&str] = &[
    "SKILLBOOK_CONFIG",
    "SKILLBOOK_STORE",
    "SKILLBOOK_LEVEL_POLICY",
    "SKILLBOOK_RENDER_SOURCE",
    "SKILLBOOK_RENDER_TIMEOUT_SECS",
    "RUST_LOG",
];

/// An isolated working directory with its own skills file and config home.
pub struct TestFixture {
    /// Root temp directory
    pub temp_dir: TempDir,
    /// Working directory for every command (temp_dir path)
    pub root: PathBuf,
    /// skills.json inside root
    pub store_path: PathBuf,
    test_name: String,
}

impl TestFixture {
    /// Fresh directory, no skills file yet
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store_path = root.join("skills.json");

        println!("\n{}", "=".repeat(70));
        println!("[FIXTURE] Test: {test_name}");
        println!("[FIXTURE] Root: {root:?}");
        println!("[FIXTURE] Store: {store_path:?}");
        println!("{}", "=".repeat(70));

        Self {
            temp_dir,
            root,
            store_path,
            test_name: test_name.to_string(),
        }
    }

    pub fn with_skills(test_name: &str, contents: &str) -> Self {
        let fixture = Self::new(test_name);
        std::fs::write(&fixture.store_path, contents).expect("Failed to write skills.json");
        fixture
    }

    pub fn with_sample(test_name: &str) -> Self {
        Self::with_skills(test_name, SAMPLE_SKILLS)
    }

    /// Write `./skillbook.toml`, picked up from the working directory.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.root.join("skillbook.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        println!("[FIXTURE] Config: {path:?}");
        path
    }

    pub fn read_store(&self) -> String {
        std::fs::read_to_string(&self.store_path).expect("Failed to read skills.json")
    }

    pub fn store_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_store()).expect("skills.json should be valid JSON")
    }

    /// Skill names of one category, in file order
    pub fn skill_names(&self, category: &str) -> Vec<String> {
        let doc = self.store_json();
        doc["skillCategories"]
            .as_array()
            .expect("skillCategories array")
            .iter()
            .find(|c| c["name"] == category)
            .unwrap_or_else(|| panic!("category {category} missing"))["skills"]
            .as_array()
            .expect("skills array")
            .iter()
            .map(|s| s["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Run with `--store` pointing at this fixture's file
    pub fn run(&self, args: &[&str]) -> CommandOutput {
        let store = self.store_path.display().to_string();
        let mut full = vec!["--store", store.as_str()];
        full.extend_from_slice(args);
        self.run_raw(&full, &[])
    }

    /// Run exactly `args`, with extra environment variables
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> CommandOutput {
        let start = std::time::Instant::now();
        println!("\n[CMD] {} skillbook {}", self.test_name, args.join(" "));

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skillbook"));
        cmd.args(args)
            .current_dir(&self.root)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", self.root.join(".config"))
            .env("NO_COLOR", "1");
        for key in SKILLBOOK_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute skillbook");
        let elapsed = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        println!("[CMD] Exit code: {}", output.status.code().unwrap_or(-1));
        println!("[CMD] Timing: {elapsed:?}");
        if !stdout.is_empty() {
            println!("[STDOUT]\n{stdout}");
        }
        if !stderr.is_empty() {
            println!("[STDERR]\n{stderr}");
        }

        CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
            elapsed,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl CommandOutput {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout should be valid JSON")
    }

    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Expected success but got exit code {}\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    pub fn assert_exit_code(&self, expected: i32) {
        assert_eq!(
            self.exit_code, expected,
            "Expected exit code {} but got {}\nstdout: {}\nstderr: {}",
            expected, self.exit_code, self.stdout, self.stderr
        );
    }
}
