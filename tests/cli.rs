//! The bmpneg and bmpcmp binaries: exit status and which stream gets what.
#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

use zenbmp::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zenbmp-cli-{}-{name}.bmp", std::process::id()))
}

fn run(bin: &str, args: &[&PathBuf], extra: &[&str]) -> Output {
    Command::new(bin).args(args).args(extra).output().unwrap()
}

fn solid(w: u32, h: u32, color: Color) -> PixelBuffer {
    PixelBuffer::from_pixels(w, h, vec![color; (w * h) as usize]).unwrap()
}

#[test]
fn failure_diagnostic_goes_to_stderr_only() {
    let missing = temp_path("does-not-exist");
    let out = temp_path("neg-out");
    let output = run(env!("CARGO_BIN_EXE_bmpneg"), &[&missing, &out], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout: {:?}", String::from_utf8_lossy(&output.stdout));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot open"));
    assert!(!out.exists());
}

#[test]
fn equal_pictures_print_only_the_verdict_on_stdout() {
    let a = temp_path("eq-a");
    save_to_file24(&a, None, None, &solid(3, 2, Color::WHITE)).unwrap();
    let output = run(env!("CARGO_BIN_EXE_bmpcmp"), &[&a, &a], &[]);
    std::fs::remove_file(&a).ok();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "These pictures are equal\n");
}

#[test]
fn differing_pictures_are_reported_even_without_listing() {
    let (a, b) = (temp_path("diff-a"), temp_path("diff-b"));
    save_to_file24(&a, None, None, &solid(3, 2, Color::WHITE)).unwrap();
    save_to_file24(&b, None, None, &solid(3, 2, Color::BLACK)).unwrap();

    let listed = run(env!("CARGO_BIN_EXE_bmpcmp"), &[&a, &b], &[]);
    let capped = run(env!("CARGO_BIN_EXE_bmpcmp"), &[&a, &b], &["--max-report", "0"]);
    for p in [&a, &b] {
        std::fs::remove_file(p).ok();
    }

    assert!(listed.status.success());
    let listed_err = String::from_utf8_lossy(&listed.stderr);
    assert!(listed_err.contains("Next pixels are different:"));
    assert_eq!(listed_err.matches("x0 ").count(), 2);

    assert!(capped.status.success());
    assert!(capped.stdout.is_empty());
    assert!(String::from_utf8_lossy(&capped.stderr).contains("These pictures differ"));
}

#[test]
fn dimension_mismatch_is_logged_once() {
    let (a, b) = (temp_path("dim-a"), temp_path("dim-b"));
    save_to_file24(&a, None, None, &solid(2, 2, Color::WHITE)).unwrap();
    save_to_file24(&b, None, None, &solid(3, 2, Color::WHITE)).unwrap();
    let output = run(env!("CARGO_BIN_EXE_bmpcmp"), &[&a, &b], &[]);
    for p in [&a, &b] {
        std::fs::remove_file(p).ok();
    }

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    assert_eq!(stderr.matches("dimensions differ").count(), 1);
    assert!(stderr.contains("is 2x2 while"));
    assert!(stderr.contains("dim-b.bmp is 3x2"));
}
