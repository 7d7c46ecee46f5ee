//! The exporter binary: summary on stdout, logs on stderr.

use std::process::Command;

#[test]
fn test_json_summary_is_not_mixed_with_logs() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");

    let output = Command::new(env!("CARGO_BIN_EXE_scamazon-export"))
        .arg("--out")
        .arg(&out)
        .arg("--assets")
        .arg(tmp.path().join("assets"))
        .arg("--json")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["exported"].as_array().unwrap().len(), 4);
    assert!(summary["skipped"].as_array().unwrap().is_empty());

    let logs = String::from_utf8_lossy(&output.stderr);
    assert!(logs.contains("Exported"));
    assert!(logs.contains("Export finished"));
}

#[test]
fn test_overlapping_out_dir_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("assets");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(assets.join("style.css"), "body {}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_scamazon-export"))
        .arg("--out")
        .arg(&assets)
        .arg("--assets")
        .arg(&assets)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(assets.join("style.css").exists());
}
