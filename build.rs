use std::{env, error::Error, fs, path::Path};

#[allow(dead_code)]
#[path = "src/pins.rs"]
mod pins;

#[path = "build/raw_config.rs"]
mod raw_config;

use raw_config::{CONFIG_FILE, EXAMPLE_CONFIG_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", EXAMPLE_CONFIG_FILE);
    println!("cargo:rerun-if-changed=src/pins.rs");
    println!("cargo:rerun-if-changed=build/raw_config.rs");

    let path = raw_config::config_file(Path::new(CONFIG_FILE).exists());
    if path != CONFIG_FILE {
        println!(
            "cargo:warning={} not found, building with {}",
            CONFIG_FILE, EXAMPLE_CONFIG_FILE
        );
    }

    // Read and parse
    let toml_str = fs::read_to_string(path)?;
    let raw = raw_config::parse(path, &toml_str)?;

    // Secrets from the build environment win over the file so they can stay out of git
    let code = raw_config::render(path, raw, |var| {
        println!("cargo:rerun-if-env-changed={}", var);
        env::var(var)
    })?;

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
