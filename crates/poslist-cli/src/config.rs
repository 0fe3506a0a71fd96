use std::path::Path;

use anyhow::Context;
use poslist_merge::MergeConfig;
use serde::{Deserialize, Serialize};

use crate::cli::MergeArgs;

/// On-disk configuration file shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub merge: MergeConfig,
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Command-line flags can only switch options on.
    pub fn apply_overrides(&mut self, args: &MergeArgs) {
        self.merge.expand_span_on_fusion |= args.expand_span;
        self.merge.validate_spans |= args.strict;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(expand_span: bool, strict: bool) -> MergeArgs {
        MergeArgs {
            left: None,
            right: None,
            expand_span,
            strict,
        }
    }

    #[test]
    fn no_path_is_default() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[merge]\nexpand_span_on_fusion = true").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(config.merge.expand_span_on_fusion);
        assert!(!config.merge.validate_spans);
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[merge]\nvalidate_spans = \"yes\"").unwrap();
        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn flags_switch_options_on() {
        let mut config = CliConfig::default();
        config.apply_overrides(&args(true, false));
        assert!(config.merge.expand_span_on_fusion);
        assert!(!config.merge.validate_spans);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let mut config = CliConfig {
            merge: MergeConfig {
                expand_span_on_fusion: false,
                validate_spans: true,
            },
        };
        config.apply_overrides(&args(false, false));
        assert!(config.merge.validate_spans);
    }
}
