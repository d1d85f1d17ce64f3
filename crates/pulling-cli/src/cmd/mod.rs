pub mod anchor;
pub mod config;
pub mod generate;
pub mod modules;
pub mod serve;

use anyhow::Context;
use pulling_core::config::Config;
use pulling_core::datasheet::Datasheet;
use std::path::Path;

pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load_or_default(path).with_context(|| match path {
        Some(p) => format!("failed to load config {}", p.display()),
        None => "failed to load config".to_string(),
    })
}

pub(crate) fn load_datasheet(path: &Path) -> anyhow::Result<Datasheet> {
    Datasheet::load(path).with_context(|| format!("failed to load datasheet {}", path.display()))
}
