//! `navguard config` – show where the config lives and what is in effect.

use anyhow::Result;
use navguard_core::config::{self, GuardConfig};

pub fn run_show_config(cfg: &GuardConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", config::render(cfg)?);
    Ok(())
}
