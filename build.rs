//! Build script for Ladle
//!
//! Stamps each build with a number and UTC timestamp. The number comes from
//! LADLE_BUILD_NUMBER when set (release pipelines), otherwise from a local
//! counter file that is bumped whenever src/ changes.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn next_local_build_number(counter: &Path) -> u64 {
    let current: u64 = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);

    let next = current + 1;
    if let Err(e) = fs::write(counter, next.to_string()) {
        println!("cargo:warning=Could not update {}: {}", counter.display(), e);
    }
    next
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=LADLE_BUILD_NUMBER");

    let build_number = std::env::var("LADLE_BUILD_NUMBER")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| next_local_build_number(Path::new(COUNTER_FILE)));

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=LADLE_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=LADLE_BUILD_TIMESTAMP={}", timestamp);
}
