//! Embeds the commit and build date shown by `flappy --version`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// First 7 characters of a commit hash, if it looks like one.
fn short_commit(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.len() < 7 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(raw[..7].to_ascii_lowercase())
}

fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    short_commit(&String::from_utf8(output.stdout).ok()?)
}

/// `BUILD_DATE` if it is a real YYYY-MM-DD date, else today in UTC.
fn build_date() -> String {
    env::var("BUILD_DATE")
        .ok()
        .filter(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok())
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    // CI pins the commit; local builds ask git
    let commit = env::var("BUILD_COMMIT")
        .ok()
        .and_then(|c| short_commit(&c))
        .or_else(git_commit)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let date = build_date();

    let dest_path = Path::new(&env::var("OUT_DIR")?).join("build_info.rs");
    fs::write(
        &dest_path,
        format!(
            "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
            commit, date
        ),
    )?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
    Ok(())
}
