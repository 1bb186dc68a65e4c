//! `dac sources` – show the built-in source registry.

use anyhow::Result;
use dac_core::sources;

pub fn run_sources() -> Result<()> {
    println!("{:<8} {:<6} {:<55} {}", "NAME", "KIND", "ENDPOINT", "DESCRIPTION");
    for s in sources::builtin_sources() {
        println!(
            "{:<8} {:<6} {:<55} {}",
            s.name,
            s.kind.as_str(),
            s.base_url,
            s.description
        );
    }
    Ok(())
}
