//! Configuration file handling
//!
//! Settings are stored as JSON. Every key is optional; missing keys take
//! their defaults and unknown keys are rejected.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted row thumbnail, in cells
pub const MAX_THUMBNAIL_COLS: u16 = 16;
pub const MAX_THUMBNAIL_ROWS: u16 = 8;
/// Largest accepted entry-screen preview, in cells
pub const MAX_PREVIEW_COLS: u16 = 200;
pub const MAX_PREVIEW_ROWS: u16 = 100;

/// User-tunable settings for the recipe organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory the image picker opens in (current directory when unset)
    pub picker_dir: Option<PathBuf>,
    /// File extensions the picker offers, without the dot
    pub image_extensions: Vec<String>,
    /// Row thumbnail size in cells
    pub thumbnail_cols: u16,
    pub thumbnail_rows: u16,
    /// Entry-screen preview size in cells
    pub preview_cols: u16,
    pub preview_rows: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            picker_dir: None,
            image_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            thumbnail_cols: 4,
            thumbnail_rows: 2,
            preview_cols: 20,
            preview_rows: 10,
        }
    }
}

impl AppConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.image_extensions.is_empty() {
            anyhow::bail!("image_extensions must list at least one extension");
        }
        for ext in &self.image_extensions {
            if ext.trim().is_empty() || ext.contains('.') {
                anyhow::bail!("Invalid image extension {:?} (expected e.g. \"png\")", ext);
            }
        }

        if self.thumbnail_cols == 0 || self.thumbnail_rows == 0 {
            anyhow::bail!("Thumbnail size must be non-zero");
        }
        if self.thumbnail_cols > MAX_THUMBNAIL_COLS || self.thumbnail_rows > MAX_THUMBNAIL_ROWS {
            anyhow::bail!(
                "Thumbnail size {}x{} exceeds {}x{}",
                self.thumbnail_cols,
                self.thumbnail_rows,
                MAX_THUMBNAIL_COLS,
                MAX_THUMBNAIL_ROWS
            );
        }
        if self.preview_cols == 0 || self.preview_rows == 0 {
            anyhow::bail!("Preview size must be non-zero");
        }
        if self.preview_cols > MAX_PREVIEW_COLS || self.preview_rows > MAX_PREVIEW_ROWS {
            anyhow::bail!(
                "Preview size {}x{} exceeds {}x{}",
                self.preview_cols,
                self.preview_rows,
                MAX_PREVIEW_COLS,
                MAX_PREVIEW_ROWS
            );
        }

        if let Some(dir) = &self.picker_dir {
            if !dir.is_dir() {
                anyhow::bail!("picker_dir {:?} is not a directory", dir);
            }
        }

        Ok(())
    }

    /// Directory the picker should open in
    pub fn picker_start_dir(&self) -> PathBuf {
        self.picker_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipetui.json");
        let config = AppConfig {
            picker_dir: Some(dir.path().to_path_buf()),
            thumbnail_cols: 6,
            ..AppConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"preview_rows": 12}"#).unwrap();
        assert_eq!(config.preview_rows, 12);
        assert_eq!(config.preview_cols, 20);
        assert_eq!(config.image_extensions.len(), 3);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<AppConfig, _> =
            serde_json::from_str(r#"{"theme": "dark"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_failures() {
        let config = AppConfig {
            image_extensions: vec![".png".to_string()],
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            image_extensions: Vec::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            thumbnail_rows: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            picker_dir: Some(PathBuf::from("/definitely/not/a/real/dir")),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let config = AppConfig {
            preview_rows: u16::MAX,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            preview_cols: MAX_PREVIEW_COLS + 1,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            thumbnail_cols: u16::MAX,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            thumbnail_rows: MAX_THUMBNAIL_ROWS + 1,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_largest_dimensions_accepted() {
        let config = AppConfig {
            thumbnail_cols: MAX_THUMBNAIL_COLS,
            thumbnail_rows: MAX_THUMBNAIL_ROWS,
            preview_cols: MAX_PREVIEW_COLS,
            preview_rows: MAX_PREVIEW_ROWS,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
