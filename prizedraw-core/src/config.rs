use crate::error::{DrawError, Result};
use crate::types::{DrawEntry, PrizeTag};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub participants_path: PathBuf,
    pub log_path: PathBuf,
    pub ranked_bands: Vec<PrizeBand>,
    pub grand_winners: Vec<DrawEntry>,
    pub shortfall: ShortfallPolicy,
}

/// `count` consecutive ranked slots that share a prize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeBand {
    pub count: usize,
    pub prize: PrizeTag,
}

impl PrizeBand {
    pub fn new(count: usize, prize: impl Into<PrizeTag>) -> Self {
        Self {
            count,
            prize: prize.into(),
        }
    }
}

/// What to do when the pool is smaller than the number of ranked slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallPolicy {
    #[default]
    Truncate,
    Fail,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            participants_path: PathBuf::from("scheme.csv"),
            log_path: PathBuf::from("winners_log.csv"),
            ranked_bands: vec![
                PrizeBand::new(10, "silver_coin"),
                PrizeBand::new(8, "dinner_set"),
                PrizeBand::new(8, "microwave"),
                PrizeBand::new(6, "washing_machine"),
                PrizeBand::new(5, "led_tv"),
                PrizeBand::new(5, "refrigerator"),
            ],
            // lowest grand prize first, the car is the final reveal
            grand_winners: vec![
                DrawEntry::new("Suraj", "ABC001", "electric_scooter"),
                DrawEntry::new("Shankar", "DEF002", "bike"),
                DrawEntry::new("Biswa", "GHI003", "car"),
            ],
            shortfall: ShortfallPolicy::Truncate,
        }
    }
}

impl DrawConfig {
    /// Reads a JSON config file; absent keys fall back to the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DrawError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves relative file paths against `base`
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        if self.participants_path.is_relative() {
            self.participants_path = base.join(&self.participants_path);
        }
        if self.log_path.is_relative() {
            self.log_path = base.join(&self.log_path);
        }
        self
    }

    pub fn ranked_total(&self) -> usize {
        self.ranked_bands.iter().map(|band| band.count).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.participants_path.as_os_str().is_empty() {
            return Err(DrawError::config("Participants path cannot be empty"));
        }

        if self.log_path.as_os_str().is_empty() {
            return Err(DrawError::config("Log path cannot be empty"));
        }

        if self.ranked_bands.is_empty() {
            return Err(DrawError::config("At least one prize band is required"));
        }

        for (i, band) in self.ranked_bands.iter().enumerate() {
            if band.count == 0 {
                return Err(DrawError::config(format!(
                    "Prize band {} ({}) must cover at least one slot",
                    i, band.prize
                )));
            }
            if band.prize.as_str().trim().is_empty() {
                return Err(DrawError::config(format!("Prize band {} has no prize", i)));
            }
        }

        for winner in &self.grand_winners {
            if winner.name.trim().is_empty()
                || winner.identity_code.trim().is_empty()
                || winner.prize.as_str().trim().is_empty()
            {
                return Err(DrawError::config(format!(
                    "Grand winner entry is incomplete: {:?}",
                    winner
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DrawConfig::default();
        config.validate().unwrap();
        assert_eq!(config.ranked_total(), 42);
        assert_eq!(config.grand_winners.len(), 3);
        assert_eq!(config.grand_winners[2].prize.as_str(), "car");
    }

    #[test]
    fn test_rejects_empty_band() {
        let mut config = DrawConfig::default();
        config.ranked_bands.push(PrizeBand::new(0, "pen"));
        assert!(matches!(config.validate(), Err(DrawError::Config(_))));

        config.ranked_bands.clear();
        assert!(matches!(config.validate(), Err(DrawError::Config(_))));
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draw.json");
        std::fs::write(
            &path,
            r#"{
                "ranked_bands": [{"count": 2, "prize": "mug"}],
                "shortfall": "fail"
            }"#,
        )
        .unwrap();

        let config = DrawConfig::load(&path).unwrap();
        assert_eq!(config.ranked_total(), 2);
        assert_eq!(config.shortfall, ShortfallPolicy::Fail);
        assert_eq!(config.log_path, PathBuf::from("winners_log.csv"));
        assert_eq!(config.grand_winners.len(), 3);
    }

    #[test]
    fn test_base_dir_resolution() {
        let base = Path::new("/srv/draw");
        let mut config = DrawConfig::default();
        config.log_path = PathBuf::from("/var/log/winners.csv");
        let config = config.with_base_dir(base);
        assert_eq!(config.participants_path, base.join("scheme.csv"));
        assert_eq!(config.log_path, PathBuf::from("/var/log/winners.csv"));
    }
}
