use crate::consts::DEFAULT_NGRAM_LENGTH;
use crate::error::{ShingleError, ShingleResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub shingling: ShinglingParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShinglingParams {
    /// Words per n-gram (1 = unigram ... 8 = eightgram; larger values are allowed)
    #[arg(short = 'n', long, default_value_t = DEFAULT_NGRAM_LENGTH)]
    pub ngram_length: usize,

    /// Lowercase words and drop English stopwords before shingling
    #[arg(long, default_value_t = false)]
    pub normalize: bool,
}

impl Default for ShinglingParams {
    fn default() -> Self {
        Self {
            ngram_length: DEFAULT_NGRAM_LENGTH,
            normalize: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Csv,
    Json,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Maximum number of records to print (0 = all)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            limit: 0,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ShingleResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShingleError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies values the user typed on the command line over this config.
    /// Flags left at their defaults do not override file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(shingling.ngram_length);
        update_if_present!(shingling.normalize);
        update_if_present!(output.limit);
        update_if_present!(output.format);
    }

    pub fn validate(&self) -> ShingleResult<()> {
        if self.shingling.ngram_length < 1 {
            return Err(ShingleError::Config(
                "ngram_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
