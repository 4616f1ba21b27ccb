//! Intent loading utilities
//!
//! This module provides `IntentLoader`, which reads a manifest and the intent files of a data
//! folder and runs the standard pipeline over them.
//!
//! A data folder holds one file per intent, named `<INTENT_NAME>.yaml`, each a YAML list of
//! sentence blocks:
//!
//! ```yaml
//! - hello
//! - good morning <entity kind="name">Ada</entity>
//! ```
//!
//! The manifest selects which of them go into a build, and in which order:
//!
//! ```yaml
//! intents:
//!   - greet
//!   - weather
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cerebro_parser::cerebro::loader::IntentLoader;
//!
//! let model = IntentLoader::from_paths("data/in", "data/in/manifest.yaml")?.build()?;
//! println!("{}", model.to_json(true)?);
//! ```

use crate::cerebro::error::BuildError;
use crate::cerebro::model::{DataModel, HumanIntent, Manifest};
use crate::cerebro::transforms::standard::BUILD_DATA_MODEL;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for reading a data folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Extension of intent files, without the dot.
    pub extension: String,
    /// Fail when the manifest names an intent that has no file, instead of skipping it.
    pub strict_manifest: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions {
            extension: "yaml".to_string(),
            strict_manifest: false,
        }
    }
}

/// Reads the intents a manifest selects from a data folder.
#[derive(Debug, Clone)]
pub struct IntentLoader {
    data_folder: PathBuf,
    manifest: Manifest,
    options: LoaderOptions,
}

impl IntentLoader {
    pub fn new(data_folder: impl Into<PathBuf>, manifest: Manifest) -> Self {
        IntentLoader {
            data_folder: data_folder.into(),
            manifest,
            options: LoaderOptions::default(),
        }
    }

    /// Load the manifest file and point at `data_folder`.
    pub fn from_paths(
        data_folder: impl Into<PathBuf>,
        manifest_path: impl AsRef<Path>,
    ) -> Result<Self, BuildError> {
        let manifest = read_manifest(manifest_path.as_ref())?;
        Ok(Self::new(data_folder, manifest))
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// Read the intents named in the manifest, in manifest order.
    ///
    /// Files that are not intent files, and intents the manifest does not name, are ignored.
    pub fn read_intents(&self) -> Result<Vec<HumanIntent>, BuildError> {
        let available = self.scan_data_folder()?;
        let mut intents: Vec<HumanIntent> = Vec::new();

        for name in &self.manifest.intents {
            if intents.iter().any(|intent| &intent.name == name) {
                continue;
            }
            match available.get(name) {
                Some(path) => intents.push(read_intent(path)?),
                None if self.options.strict_manifest => {
                    return Err(BuildError::MissingIntent { name: name.clone() });
                }
                None => {
                    tracing::warn!(
                        intent = %name,
                        folder = %self.data_folder.display(),
                        "intent listed in manifest has no file, skipping"
                    );
                }
            }
        }

        Ok(intents)
    }

    /// Read the selected intents and build the data model.
    pub fn build(&self) -> Result<DataModel, BuildError> {
        let intents = self.read_intents()?;
        let intent_count = intents.len();
        let model = BUILD_DATA_MODEL.run(intents)?;
        tracing::info!(
            intents = intent_count,
            entries = model.len(),
            "built data model"
        );
        Ok(model)
    }

    /// Map of intent name to file path for every intent file in the data folder.
    fn scan_data_folder(&self) -> Result<HashMap<String, PathBuf>, BuildError> {
        let io_error = |source| BuildError::Io {
            path: self.data_folder.clone(),
            source,
        };

        let mut available = HashMap::new();
        for entry in fs::read_dir(&self.data_folder).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.options.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                available.insert(stem.to_string(), path.clone());
            }
        }

        tracing::debug!(
            folder = %self.data_folder.display(),
            files = available.len(),
            "scanned data folder"
        );
        Ok(available)
    }
}

/// Load a manifest file.
pub fn read_manifest(path: &Path) -> Result<Manifest, BuildError> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|source| BuildError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Load one intent file. The intent is named after the file stem; an empty file has no
/// sentences.
pub fn read_intent(path: &Path) -> Result<HumanIntent, BuildError> {
    let content = read_file(path)?;
    let sentences: Option<Vec<String>> = if content.trim().is_empty() {
        None
    } else {
        serde_yaml::from_str(&content).map_err(|source| BuildError::IntentFile {
            path: path.to_path_buf(),
            source,
        })?
    };
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(HumanIntent::new(name, sentences.unwrap_or_default()))
}

fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
