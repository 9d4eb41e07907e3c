//! Build script for moodmix.
//!
//! Copies the `.env.example` template into the user's local data directory so
//! the application finds a ready-to-edit configuration next to where it looks
//! for `.env`:
//! - Linux: `~/.local/share/moodmix/.env.example`
//! - macOS: `~/Library/Application Support/moodmix/.env.example`
//! - Windows: `%LOCALAPPDATA%/moodmix/.env.example`

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("moodmix");
    fs::create_dir_all(&out_dir)?;

    // a missing template only warns
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
