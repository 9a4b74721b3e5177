use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let (commit_full, commit_short) = resolve_commit();
    let build_date =
        git_output(&["log", "-1", "--format=%cI"]).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RXMER_BUILD_COMMIT={}", commit_short);
    println!("cargo:rustc-env=RXMER_BUILD_COMMIT_FULL={}", commit_full);
    println!("cargo:rustc-env=RXMER_BUILD_DATE={}", build_date);
}

// CI exports GITHUB_SHA; local builds fall back to the working tree.
fn resolve_commit() -> (String, String) {
    let full = env::var("GITHUB_SHA")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| git_output(&["rev-parse", "HEAD"]));

    match full {
        Some(full) => {
            let short = full.chars().take(7).collect();
            (full, short)
        }
        None => {
            let short = git_output(&["rev-parse", "--short", "HEAD"])
                .unwrap_or_else(|| "unknown".to_string());
            ("unknown".to_string(), short)
        }
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
