//! Lexicon Loader
//!
//! Builds a locale's language table from the embedded default plus any repo
//! and user override files.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use tracing::{debug, info};

use super::{Lexicon, embedded};

/// Loads and layers language tables
pub struct LexiconLoader {
    /// User override directory (e.g., `.tplcache/lang/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (e.g., `lang/`)
    repo_dir: Option<PathBuf>,
}

impl LexiconLoader {
    /// Create a loader rooted at a project directory
    ///
    /// # Arguments
    /// * `root` - Project root (used to find `.tplcache/lang/` and `lang/`)
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        debug!(?root, "LexiconLoader::new: called");
        Self::with_dirs(Some(root.join(".tplcache/lang")), Some(root.join("lang")))
    }

    /// Create a loader with explicit override directories
    ///
    /// Directories that do not exist are ignored.
    pub fn with_dirs(user_dir: Option<PathBuf>, repo_dir: Option<PathBuf>) -> Self {
        let user_dir = user_dir.filter(|d| d.is_dir());
        let repo_dir = repo_dir.filter(|d| d.is_dir());
        debug!(?user_dir, ?repo_dir, "LexiconLoader::with_dirs: resolved directories");
        Self { user_dir, repo_dir }
    }

    /// Create a loader that only uses embedded tables (for testing)
    pub fn embedded_only() -> Self {
        debug!("LexiconLoader::embedded_only: called");
        Self {
            user_dir: None,
            repo_dir: None,
        }
    }

    fn read_layer(dir: &Path, locale: &str) -> Result<Option<Lexicon>> {
        let path = dir.join(format!("{}.yml", locale));
        if !path.exists() {
            debug!(?path, "LexiconLoader::read_layer: not found");
            return Ok(None);
        }
        debug!(?path, "LexiconLoader::read_layer: found");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| eyre!("Failed to read language file {}: {}", path.display(), e))?;
        let lexicon = Lexicon::from_yaml_str(&content)
            .map_err(|e| eyre!("Invalid language file {}: {}", path.display(), e))?;
        Ok(Some(lexicon))
    }

    /// Load the table for `locale`
    ///
    /// Layers in order: embedded, repo, user. Fails only when no layer
    /// provides the locale at all.
    pub fn load(&self, locale: &str) -> Result<Lexicon> {
        debug!(%locale, "LexiconLoader::load: called");
        let mut lexicon = Lexicon::new();
        let mut found = false;

        if let Some(src) = embedded::get_embedded(locale) {
            debug!(%locale, "LexiconLoader::load: using embedded base");
            lexicon.merge(Lexicon::from_yaml_str(src)?);
            found = true;
        }

        for dir in [&self.repo_dir, &self.user_dir].into_iter().flatten() {
            if let Some(layer) = Self::read_layer(dir, locale)? {
                lexicon.merge(layer);
                found = true;
            }
        }

        if !found {
            debug!(%locale, "LexiconLoader::load: not found anywhere");
            return Err(eyre!("Language not found: {}", locale));
        }

        info!("Loaded language '{}' ({} entries)", locale, lexicon.len());
        Ok(lexicon)
    }
}
