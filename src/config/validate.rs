// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, StepdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = StepdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.schedule))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_schedule(cfg)?;
    Ok(())
}

fn validate_schedule(cfg: &RawConfigFile) -> Result<()> {
    if cfg.schedule.workers == 0 {
        return Err(StepdagError::ConfigError(
            "[schedule].workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
