// File: crates/netplot/tests/cli.rs
// Purpose: Run the built binary: two positional arguments, exit codes, files on disk.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn netplot<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netplot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn netplot")
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/cli").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn plots_two_positional_arguments() {
    let dir = scratch("ok");
    let input = dir.join("net.dat");
    std::fs::write(&input, "1 10 2\n2 20 4\n3 15 3\n").unwrap();
    let output = dir.join("net.png");

    let out = netplot(&[&input, &output]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let img = image::open(&output).expect("decode png");
    assert_eq!((img.width(), img.height()), (1920, 1080));
}

#[test]
fn short_row_warns_and_succeeds() {
    let dir = scratch("short");
    let input = dir.join("net.dat");
    std::fs::write(&input, "1 10 2\n2 20 4\n3 15 3\n4 40\n").unwrap();
    let output = dir.join("net.png");

    let out = netplot(&[&input, &output]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("WARN"), "expected a skip warning, got: {stderr}");
    assert!(output.exists());
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = scratch("missing");
    let output = dir.join("net.png");

    let out = netplot(&[&dir.join("absent.dat"), &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.dat"), "error should name the input: {stderr}");
}

#[test]
fn output_in_missing_directory_exits_nonzero() {
    let dir = scratch("no_dir");
    let input = dir.join("net.dat");
    std::fs::write(&input, "1 10 2\n").unwrap();
    let output = dir.join("missing").join("net.png");

    let out = netplot(&[&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn wrong_argument_count_is_usage_error() {
    let dir = scratch("usage");
    let out = netplot(&[&dir.join("only-one.dat")]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn optional_flags_keep_the_contract() {
    let dir = scratch("flags");
    let input = dir.join("net.dat");
    std::fs::write(&input, "0 8 1 1\n1 16 2 1\n2 30 2 2\n").unwrap();
    let output = dir.join("net.png");

    let out = Command::new(env!("CARGO_BIN_EXE_netplot"))
        .arg(&input)
        .arg(&output)
        .args(["--complete", "--theme", "dark", "--title", "Ageing", "-q"])
        .output()
        .expect("spawn netplot");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let img = image::open(&output).expect("decode png");
    assert_eq!((img.width(), img.height()), (1920, 1080));
}
