//! Command-line interface for batch replaying edit scripts into art documents

use crate::io::configuration::{OUTPUT_SUFFIX, SCRIPT_EXTENSION};
use crate::io::error::{EditorError, Result};
use crate::io::progress::ProgressManager;
use crate::io::script::EditScript;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pixelgrid")]
#[command(
    author,
    version,
    about = "Replay pixel-art edit scripts and export the resulting grids"
)]
/// Command-line arguments for the script replay tool
pub struct Cli {
    /// Edit script (JSON) or directory of scripts to replay
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process scripts even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Keep at most this many undo entries while replaying
    #[arg(short = 'l', long, value_name = "ENTRIES")]
    pub history_limit: Option<usize>,

    /// Indent the exported documents
    #[arg(short, long)]
    pub pretty: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch replay of edit scripts with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Replay scripts according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, replay or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to replay in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Check if a path looks like an edit script rather than an exported document
    pub fn is_script_path(path: &Path) -> bool {
        let is_json = path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION);
        let is_output = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        is_json && !is_output
    }

    /// Scripts selected by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a script nor a directory, or
    /// the directory cannot be listed
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !Self::is_script_path(target) {
                return Err(crate::io::error::invalid_parameter(
                    "target",
                    &target.display(),
                    &"Target file must be a JSON edit script",
                ));
            }
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if !target.is_dir() {
            return Err(crate::io::error::invalid_parameter(
                "target",
                &target.display(),
                &"Target must be a JSON edit script or directory",
            ));
        }

        let entries = std::fs::read_dir(target).map_err(|e| EditorError::FileSystem {
            path: target.clone(),
            operation: "list directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if Self::is_script_path(&path) && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let script = EditScript::from_path(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_script(index, input_path, script.intents.len());
        }

        let config = script.session_config(self.cli.history_limit);
        let progress = &mut self.progress_manager;
        let session = script.replay_with(&config, |applied| {
            if let Some(pm) = progress.as_mut() {
                pm.update_step(index, applied);
            }
        })?;

        let output_path = Self::output_path(input_path);
        session
            .document()
            .write_to_path(&output_path, self.cli.pretty)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_script(index);
        }

        info!(
            "{} -> {} ({}x{}, {} intents) in {:.2?}",
            input_path.display(),
            output_path.display(),
            session.grid().width(),
            session.grid().height(),
            script.intents.len(),
            start_time.elapsed()
        );
        Ok(())
    }

    /// Where the document replayed from `input_path` is written
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            SCRIPT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
