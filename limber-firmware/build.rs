//! Build script for limber-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates poses.toml at compile time
//! - Generates the static pose catalog from poses.toml

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use limber_core::manifest::{parse_manifest, Manifest};

fn main() {
    setup_linker();
    generate_catalog();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate poses.toml and write `$OUT_DIR/poses.rs`
fn generate_catalog() {
    println!("cargo:rerun-if-changed=poses.toml");

    let config_path = Path::new("poses.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: poses.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a poses.toml catalog file.                ║\n\
            ║  Please create one in the limber-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read poses.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let manifest = match parse_manifest(&content) {
        Ok(manifest) => manifest,
        Err(errors) => {
            let lines = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: poses.toml validation failed                             ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&lines)
            );
        }
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("poses.rs"), render_catalog(&manifest)).unwrap();

    println!(
        "cargo:warning=poses.toml validated successfully ({} poses, {}s interval)",
        manifest.poses.len(),
        manifest.timer.interval_s
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                let head: String = line.chars().take(61).collect();
                format!("{}...", head)
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rust source for the validated catalog
fn render_catalog(manifest: &Manifest) -> String {
    let mut out = String::new();
    out.push_str("// Generated from poses.toml by build.rs\n\n");
    writeln!(out, "pub const INTERVAL_S: u16 = {};", manifest.timer.interval_s).unwrap();
    writeln!(out, "pub const PULSE_MS: u16 = {};", manifest.timer.pulse_ms).unwrap();
    out.push_str("\npub static POSES: &[Pose] = &[\n");
    for pose in &manifest.poses {
        writeln!(out, "    Pose::new({:?}, {:?}),", pose.name, pose.description).unwrap();
    }
    out.push_str("];\n");
    out
}
