use std::path::PathBuf;
use std::process::Command;

fn bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_bmiviz")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "bmiviz.exe"
            } else {
                "bmiviz"
            });
            p
        })
}

#[test]
fn cli_classify_emits_json() {
    let output = Command::new(bin())
        .args(["classify", "--weight", "70", "--height", "175", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["category"], "Normal");
    assert_eq!(v["lower"], 18.5);
    assert_eq!(v["upper"], 25.0);
}

#[test]
fn cli_rejects_zero_height() {
    let output = Command::new(bin())
        .args(["classify", "--weight", "70", "--height", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input"));
}

#[test]
fn cli_rejects_implausible_values() {
    let output = Command::new(bin())
        .args(["classify", "--weight", "500", "--height", "50"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("implausible value"));
}

#[test]
fn cli_png_writes_file() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("chart.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = Command::new(bin())
        .args([
            "png",
            "--weight",
            "70",
            "--height",
            "175",
            "--out",
            out_arg.as_str(),
        ])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
}
