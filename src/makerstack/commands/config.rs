use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::error::{MakerError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SiteConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SiteConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SiteConfig::load(dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(MakerError::Config(e)) => {
                    let mut res = CmdResult::default();
                    res.add_message(CmdMessage::error(e));
                    return Ok(res);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            tracing::info!(key = %key, "config updated");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}
