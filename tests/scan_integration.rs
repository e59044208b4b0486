//! End-to-end scans through the CLI entry point.
//!
//! Each test writes a policy and a small source tree into a temp dir and
//! checks both the diagnostic output and the exit code.

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use splinter::cli::{self, Cli, EXIT_FAILED, EXIT_SUCCESS};

const CONFIG: &str = r#"{
    "short-variable-length": 4,
    "long-variable-length": 20,
    "short-function-length": 3,
    "long-function-length": 30
}"#;

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new(allowlist: &str) -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("policy")).unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        std::fs::write(temp.path().join("policy/config.json"), CONFIG).unwrap();
        std::fs::write(temp.path().join("policy/allowlist.txt"), allowlist).unwrap();
        Self { temp }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn src(&self) -> std::path::PathBuf {
        self.root().join("src")
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.src().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn cli(&self, extra: &[&str]) -> Cli {
        let src = self.src();
        let config = self.root().join("policy/config.json");
        let allowlist = self.root().join("policy/allowlist.txt");
        let mut args = vec![
            "splinter".to_string(),
            src.to_string_lossy().to_string(),
            "--config".to_string(),
            config.to_string_lossy().to_string(),
            "--allowlist".to_string(),
            allowlist.to_string_lossy().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    /// Run a scan and return (exit code, stdout).
    fn run(&self, extra: &[&str]) -> (i32, String) {
        let mut out = Vec::new();
        let code = cli::run_lint(&self.cli(extra), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    fn display(&self, rel: &str) -> String {
        self.src().join(rel).display().to_string()
    }
}

#[test]
fn test_short_variable_reported() {
    let ws = Workspace::new("");
    ws.write("t.py", "x = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_FAILED);
    assert_eq!(
        output,
        format!(
            "{}:1: Variable name 'x' is too short [short-variable]\n",
            ws.display("t.py")
        )
    );
}

#[test]
fn test_allowlisted_variable_silent() {
    let ws = Workspace::new("x\n");
    ws.write("t.py", "x = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(output, "");
}

#[test]
fn test_allowlisted_shown_with_flag() {
    let ws = Workspace::new("x\n");
    ws.write("t.py", "x = 1\n");

    let (code, output) = ws.run(&["--show-suppressed"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.ends_with("[short-variable] (allowed)\n"));
}

#[test]
fn test_syntax_error_does_not_stop_scan() {
    let ws = Workspace::new("");
    ws.write("a_broken.py", "def broken(:\n    pass\n");
    ws.write("b_names.py", "x = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_FAILED);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!(
        "{}: SyntaxError: ",
        ws.display("a_broken.py")
    )));
    assert!(lines[0].contains("(a_broken.py, line 1)"));
    assert_eq!(
        lines[1],
        format!(
            "{}:1: Variable name 'x' is too short [short-variable]",
            ws.display("b_names.py")
        )
    );
}

#[test]
fn test_only_syntax_error_still_fails() {
    let ws = Workspace::new("");
    ws.write("bad.py", "if True\n    pass\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_FAILED);
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn test_no_python_files() {
    let ws = Workspace::new("");
    ws.write("README.md", "# nothing to lint\n");
    ws.write("data/values.txt", "x = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(output, "");
}

#[test]
fn test_boundaries_not_reported() {
    let ws = Workspace::new("");
    ws.write(
        "bounds.py",
        &format!(
            "abcd = 1\n{} = 2\n\ndef abc():\n    pass\n\ndef {}():\n    pass\n",
            "v".repeat(20),
            "f".repeat(30)
        ),
    );

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_SUCCESS, "unexpected output: {output}");
}

#[test]
fn test_nested_directories_scanned_in_order() {
    let ws = Workspace::new("");
    ws.write("pkg/inner/deep.py", "def f():\n    pass\n");
    ws.write("alpha.py", "ab = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_FAILED);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!(
                "{}:1: Variable name 'ab' is too short [short-variable]",
                ws.display("alpha.py")
            ),
            format!(
                "{}:1: Function name 'f' is too short [short-function]",
                ws.display("pkg/inner/deep.py")
            ),
        ]
    );
}

#[test]
fn test_idempotent() {
    let ws = Workspace::new("i\n");
    ws.write("one.py", "x = 1\nfor i in range(3):\n    y = i\n");
    ws.write("two.py", "def go():\n    pass\n");
    ws.write("three.py", "def (\n");

    let first = ws.run(&[]);
    let second = ws.run(&[]);
    assert_eq!(first, second);
    assert_eq!(first.0, EXIT_FAILED);
}

#[test]
fn test_json_output() {
    let ws = Workspace::new("");
    ws.write("t.py", "x = 1\n");

    let (code, output) = ws.run(&["--format", "json"]);
    assert_eq!(code, EXIT_FAILED);

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["files_scanned"], 1);
    assert_eq!(report["issue_count"], 1);
    assert_eq!(report["passed"], false);
    assert_eq!(report["violations"][0]["identifier"], "x");
    assert_eq!(report["violations"][0]["category"], "short-variable");
}

#[test]
fn test_missing_allowlist_is_startup_error() {
    let ws = Workspace::new("");
    ws.write("t.py", "x = 1\n");
    std::fs::remove_file(ws.root().join("policy/allowlist.txt")).unwrap();

    let mut out = Vec::new();
    let err = cli::run_lint(&ws.cli(&[]), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("allowlist.txt"));
    assert!(out.is_empty());
}

#[test]
fn test_inverted_thresholds_is_startup_error() {
    let ws = Workspace::new("");
    ws.write("t.py", "x = 1\n");
    std::fs::write(
        ws.root().join("policy/config.json"),
        r#"{
            "short-variable-length": 30,
            "long-variable-length": 20,
            "short-function-length": 3,
            "long-function-length": 30
        }"#,
    )
    .unwrap();

    let mut out = Vec::new();
    let err = cli::run_lint(&ws.cli(&[]), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("short-variable-length"));
}

#[test]
fn test_missing_root_is_startup_error() {
    let ws = Workspace::new("");
    std::fs::remove_dir(ws.src()).unwrap();

    let mut out = Vec::new();
    assert!(cli::run_lint(&ws.cli(&[]), &mut out).is_err());
}

#[test]
fn test_excluded_paths() {
    let ws = Workspace::new("");
    std::fs::write(
        ws.root().join("policy/config.json"),
        r#"{
            "short-variable-length": 4,
            "long-variable-length": 20,
            "short-function-length": 3,
            "long-function-length": 30,
            "excluded-paths": ["generated/**"]
        }"#,
    )
    .unwrap();
    ws.write("generated/proto_pb2.py", "x = 1\n");
    ws.write("app.py", "value = 1\n");

    let (code, output) = ws.run(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(output, "");
}
