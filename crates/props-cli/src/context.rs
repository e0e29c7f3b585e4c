//! Run context assembled from parsed arguments and settings
//!
//! Command handlers receive this immutable value instead of reading
//! global state.

use std::path::PathBuf;

use props_content::WriterOptions;
use props_fs::{ConfigStore, DocumentRef, Settings};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Where command output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    /// Print to standard output
    Stdout,
    /// Overwrite the command's own destination or target document
    InPlace,
    /// Write to the given file
    File(PathBuf),
}

impl SaveMode {
    pub fn from_flag(save: Option<Option<PathBuf>>) -> Self {
        match save {
            None => Self::Stdout,
            Some(None) => Self::InPlace,
            Some(Some(path)) => Self::File(path),
        }
    }
}

/// Resolved output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

/// Options shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub save: SaveMode,
    pub writer: WriterOptions,
}

impl RunContext {
    /// Combine CLI flags with the optional settings file.
    ///
    /// Flags (and their environment variables) override the file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = ConfigStore::new().load_settings(cli.config.as_deref())?;
        Ok(Self::from_parts(
            SaveMode::from_flag(cli.save.clone()),
            &settings,
            cli.passthrough_unicode,
        ))
    }

    pub fn from_parts(save: SaveMode, settings: &Settings, passthrough_unicode: bool) -> Self {
        let writer = WriterOptions {
            escape_unicode: settings.output.escape_unicode && !passthrough_unicode,
            unicode_threshold: settings.output.unicode_threshold,
        };
        Self { save, writer }
    }

    /// Resolve the output sink; `own` is the document `--save` overwrites.
    pub fn sink(&self, own: &DocumentRef) -> Result<Sink> {
        match &self.save {
            SaveMode::Stdout => Ok(Sink::Stdout),
            SaveMode::File(path) => Ok(Sink::File(path.clone())),
            SaveMode::InPlace => own
                .path()
                .map(|path| Sink::File(path.to_path_buf()))
                .ok_or_else(|| {
                    CliError::user("--save without a file needs a destination file to overwrite")
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use props_fs::OutputSettings;

    fn context(save: SaveMode) -> RunContext {
        RunContext::from_parts(save, &Settings::default(), false)
    }

    #[test]
    fn test_save_mode_from_flag() {
        assert_eq!(SaveMode::from_flag(None), SaveMode::Stdout);
        assert_eq!(SaveMode::from_flag(Some(None)), SaveMode::InPlace);
        assert_eq!(
            SaveMode::from_flag(Some(Some(PathBuf::from("out")))),
            SaveMode::File(PathBuf::from("out"))
        );
    }

    #[test]
    fn test_sink_resolution() {
        let own = DocumentRef::from("dest.properties");
        assert_eq!(context(SaveMode::Stdout).sink(&own).unwrap(), Sink::Stdout);
        assert_eq!(
            context(SaveMode::InPlace).sink(&own).unwrap(),
            Sink::File(PathBuf::from("dest.properties"))
        );
        assert_eq!(
            context(SaveMode::File(PathBuf::from("other"))).sink(&own).unwrap(),
            Sink::File(PathBuf::from("other"))
        );
    }

    #[test]
    fn test_in_place_save_of_sentinel_is_user_error() {
        let result = context(SaveMode::InPlace).sink(&DocumentRef::Empty);
        assert!(matches!(result, Err(CliError::User { .. })));
    }

    #[test]
    fn test_flag_overrides_settings() {
        let settings = Settings {
            output: OutputSettings {
                escape_unicode: true,
                unicode_threshold: 0xFF,
            },
        };
        let ctx = RunContext::from_parts(SaveMode::Stdout, &settings, true);
        assert!(!ctx.writer.escape_unicode);
        assert_eq!(ctx.writer.unicode_threshold, 0xFF);
    }
}
