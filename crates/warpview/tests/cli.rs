use std::process::Command;

#[test]
fn help_describes_the_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_warpview"))
        .arg("--help")
        .output()
        .expect("run warpview --help");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("--tuning"));
    assert!(text.contains("--fps-cap"));
    assert!(text.contains("--no-vsync"));
    assert!(text.contains("--window-size"));
}

#[test]
fn rejects_a_zero_window_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_warpview"))
        .args(["--window-size", "0x720"])
        .output()
        .expect("run warpview");
    assert!(!output.status.success());
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("window size"));
}

#[test]
fn rejects_a_negative_fps_cap() {
    let output = Command::new(env!("CARGO_BIN_EXE_warpview"))
        .args(["--fps-cap", "-30"])
        .output()
        .expect("run warpview");
    assert!(!output.status.success());
}
