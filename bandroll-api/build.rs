//! Stamps the binaries with the source revision and build time
//!
//! `build_info()` in `src/cli.rs` reads these back with `env!`.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn main() {
    // Rebuild when the checked-out commit moves, not on every source edit
    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={head}");
    }
    println!("cargo:rerun-if-changed=build.rs");

    let revision = git(&["describe", "--always", "--dirty", "--abbrev=10"])
        .unwrap_or_else(|| String::from("untracked"));
    let built_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    let profile = std::env::var("PROFILE").unwrap_or_default();

    println!("cargo:rustc-env=BANDROLL_REVISION={revision}");
    println!("cargo:rustc-env=BANDROLL_BUILT_AT={built_at}");
    println!("cargo:rustc-env=BANDROLL_PROFILE={profile}");
}
