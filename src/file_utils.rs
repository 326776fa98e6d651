use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::LoaderError;

// @module: Locale tree discovery and file reading

/// One namespace file of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Locale code, the name of the directory holding the file
    pub locale: String,
    /// Namespace, the file name without extension
    pub namespace: String,
    /// Path of the file
    pub path: PathBuf,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Read the raw bytes of a locale file.
    ///
    /// Decoding is left to the validator, so a badly encoded file fails
    /// validation instead of the whole run.
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoaderError> {
        fs::read(&path).map_err(|e| LoaderError::ReadFile {
            path: path.as_ref().to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Namespace of a locale file, its file name without extension
    pub fn namespace_of<P: AsRef<Path>>(path: P) -> Option<String> {
        path.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
    }

    /// Find all namespace files below a locale root.
    ///
    /// Every directory directly below `root` is a locale and every regular
    /// file directly inside it is a namespace. Hidden entries and anything
    /// nested deeper are ignored. Results are sorted by locale, then by file
    /// name.
    pub fn find_locale_files<P: AsRef<Path>>(root: P) -> Result<Vec<LocaleFile>, LoaderError> {
        let root = root.as_ref();

        if !Self::dir_exists(root) {
            return Err(LoaderError::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = entry.map_err(|e| LoaderError::ReadDir {
                path: e.path().unwrap_or(root).to_path_buf(),
                message: e.to_string(),
            })?;

            if entry.depth() == 1 {
                if !entry.file_type().is_dir() {
                    trace!("Skipping {:?}, not a locale directory", entry.path());
                }
                continue;
            }

            if !entry.file_type().is_file() {
                trace!("Skipping {:?}, not a namespace file", entry.path());
                continue;
            }

            let path = entry.path();
            let locale = path
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().to_string());
            let namespace = Self::namespace_of(path);

            if let (Some(locale), Some(namespace)) = (locale, namespace) {
                files.push(LocaleFile {
                    locale,
                    namespace,
                    path: path.to_path_buf(),
                });
            }
        }

        debug!("Found {} locale files in {:?}", files.len(), root);

        Ok(files)
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
