// crates/bunkai/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Dictionary configuration.
///
/// Either a preset dictionary (downloaded and cached on first use) or a local
/// compiled dictionary file. When `local_path` is set it wins over `preset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` means the OS default chosen by `DictionaryManager`.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Local compiled dictionary file (e.g. `system.dic.zst`).
  #[serde(default)]
  pub local_path: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and implements neither
/// `Deserialize` nor `FromStr`, and the orphan rule keeps us from adding them.
/// This enum is the configuration-side stand-in; convert with `.into()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest, MeCab compatible features
  #[default]
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Returns the name used in configuration values.
  pub fn name(&self) -> &'static str {
    match self {
      DictionaryPreset::Ipadic => "ipadic",
      DictionaryPreset::UnidicCwj => "unidic-cwj",
      DictionaryPreset::UnidicCsj => "unidic-csj",
    }
  }
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(ConfigError::UnknownPreset {
        name: s.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for DictionaryPreset {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

// ===== Accessor Methods =====

impl DictionaryConfig {
  /// Configuration for a preset dictionary in the default cache directory.
  pub fn with_preset(preset: DictionaryPreset) -> Self {
    Self {
      preset,
      ..Self::default()
    }
  }

  /// Returns the preset dictionary type to pass to `DictionaryManager`.
  pub fn preset_kind(&self) -> PresetDictionaryKind {
    self.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  pub fn cache_dir(&self) -> Option<&Path> {
    self.cache_dir.as_deref()
  }

  /// Returns the configured local dictionary file.
  pub fn local_path(&self) -> Option<&Path> {
    self.local_path.as_deref()
  }

  /// Validates the configuration.
  ///
  /// - `cache_dir`, when set, exists as a directory or can be created
  ///
  /// Local dictionary existence is checked by `DictionaryManager::from_local_path`.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(cache_dir) = &self.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// DictionaryPreset (for configuration) -> PresetDictionaryKind (for vibrato-rkyv).
impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
