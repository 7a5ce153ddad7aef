pub mod skip;

pub use skip::SkipList;

use crate::config::Config;
use crate::preprocess::Preprocessor;
use eyre::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to a single source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileAction {
    /// Run through the preprocessor
    Processed,
    /// Copied byte-for-byte
    Copied,
}

/// Summary of a finished build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub features: Vec<String>,
    pub processed: usize,
    pub copied: usize,
    pub skipped: usize,
    pub directories: usize,
    pub dry_run: bool,
}

/// Copies a source tree to an output tree, preprocessing matching files
pub struct Builder {
    config: Config,
    preprocessor: Preprocessor,
    dry_run: bool,
}

impl Builder {
    /// Create a new builder with the given configuration and enabled features
    pub fn new(config: Config, preprocessor: Preprocessor) -> Self {
        Self {
            config,
            preprocessor,
            dry_run: false,
        }
    }

    /// Validate every file without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Preprocess or copy the contents of `source` into `destination`.
    ///
    /// The destination is removed and recreated first. The first file that
    /// fails to preprocess aborts the build.
    pub fn build(&self, source: &Path, destination: &Path) -> Result<BuildReport> {
        if !source.is_dir() {
            return Err(eyre::eyre!(
                "Source directory \"{}\" not found. Please provide a valid source directory.",
                source.display()
            ));
        }

        let skip = SkipList::load(source, &self.config.ignore_file, &self.config.skip)?;
        log::debug!("Skip list: {:?}", skip.entries());

        // The reset below must never reach the source tree
        if let (Ok(source_abs), Ok(dest_abs)) = (fs::canonicalize(source), fs::canonicalize(destination)) {
            if source_abs.starts_with(&dest_abs) {
                return Err(eyre::eyre!(
                    "Output directory \"{}\" contains the source directory \"{}\"",
                    destination.display(),
                    source.display()
                ));
            }
        }

        if !self.dry_run {
            Self::reset_destination(destination)?;
        }

        // Never descend into the output tree when it sits inside the source
        let destination_abs = fs::canonicalize(destination).ok();

        let mut skipped = 0;
        let mut directories = 0;
        let mut files = Vec::new();
        let walker = WalkDir::new(source)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if skip.matches(entry.file_name()) {
                    log::debug!("Skipping {}", entry.path().display());
                    skipped += 1;
                    return false;
                }
                let is_destination = entry.file_type().is_dir()
                    && destination_abs
                        .as_deref()
                        .is_some_and(|dest| fs::canonicalize(entry.path()).is_ok_and(|p| p == dest));
                !is_destination
            });

        for entry in walker {
            let entry = entry.wrap_err_with(|| format!("Failed to walk {}", source.display()))?;
            let relative = entry.path().strip_prefix(source)?.to_path_buf();
            let target = destination.join(&relative);

            if entry.file_type().is_dir() {
                if !self.dry_run {
                    fs::create_dir_all(&target)
                        .wrap_err_with(|| format!("Failed to create directory {}", target.display()))?;
                }
                directories += 1;
            } else {
                files.push((entry.into_path(), target));
            }
        }

        let actions = files
            .par_iter()
            .map(|(src, dest)| self.build_file(src, dest))
            .collect::<Result<Vec<_>>>()?;

        let mut report = BuildReport {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            features: self.preprocessor.features().into_iter().map(String::from).collect(),
            skipped,
            directories,
            dry_run: self.dry_run,
            ..Default::default()
        };
        for action in actions {
            match action {
                FileAction::Processed => report.processed += 1,
                FileAction::Copied => report.copied += 1,
            }
        }

        log::debug!(
            "Built from \"{}\" → \"{}\" with features: {:?}",
            source.display(),
            destination.display(),
            report.features
        );

        Ok(report)
    }

    /// Preprocess or copy one file
    fn build_file(&self, src: &Path, dest: &Path) -> Result<FileAction> {
        if !self.config.is_processed(src) {
            log::debug!("Copying {}", src.display());
            if !self.dry_run {
                Self::ensure_parent(dest)?;
                fs::copy(src, dest).wrap_err_with(|| {
                    format!("Failed to copy {} to {}", src.display(), dest.display())
                })?;
            }
            return Ok(FileAction::Copied);
        }

        log::debug!("Preprocessing {}", src.display());
        let content = fs::read_to_string(src)
            .wrap_err_with(|| format!("Failed to read file {}", src.display()))?;
        let filtered = self
            .preprocessor
            .process(&content)
            .wrap_err_with(|| format!("Failed to preprocess {}", src.display()))?;

        if !self.dry_run {
            Self::ensure_parent(dest)?;
            fs::write(dest, filtered)
                .wrap_err_with(|| format!("Failed to write file {}", dest.display()))?;
        }
        Ok(FileAction::Processed)
    }

    /// Remove the destination tree and create it empty
    fn reset_destination(destination: &Path) -> Result<()> {
        if destination.exists() {
            fs::remove_dir_all(destination)
                .wrap_err_with(|| format!("Failed to remove {}", destination.display()))?;
        }
        fs::create_dir_all(destination)
            .wrap_err_with(|| format!("Failed to create directory {}", destination.display()))
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
        }
        Ok(())
    }
}
