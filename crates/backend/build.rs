use std::env;
use std::fs;
use std::path::Path;

/// Puts the workspace `config.toml` into `target/<profile>` so the binary
/// finds it next to itself.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let Some(profile_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=no {} directory above OUT_DIR, config.toml not copied", profile);
        return;
    };

    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !config.exists() {
        println!("cargo:warning=no workspace config.toml, the embedded defaults apply");
        return;
    }

    fs::copy(&config, profile_dir.join("config.toml"))
        .unwrap_or_else(|e| panic!("copy config.toml: {}", e));
}
