#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use smartchef::adapter::generator::TemplateGenerator;
use smartchef::app::RecipeStore;

/// Store backed by an instant template generator and no persistence.
pub fn instant_store() -> RecipeStore {
    RecipeStore::new(Arc::new(TemplateGenerator::with_delay(Duration::ZERO)))
}

/// Write a config that makes generation instant and keeps data in `data_dir`.
pub fn write_config(dir: &Path, data_dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[logging]\nlevel = \"warn\"\n\n[storage]\ndir = \"{}\"\n\n[generation]\ndelay_ms = 0\ntimeout_ms = 5000\n",
        data_dir.display()
    );
    fs::write(&path, contents).expect("write temp config");
    path
}
