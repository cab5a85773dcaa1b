//! Shell configuration from environment variables

use std::env;
use std::fmt;
use std::str::FromStr;

const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";
const DEFAULT_EXIT_COMMAND: &str = "exit";

/// How each turn is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The message sentence
    #[default]
    Text,
    /// One JSON object per turn
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub prompt: String,
    pub exit_command: String,
    pub verbose: bool,
    /// Settings that were present but unusable, with the reason
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            prompt: DEFAULT_PROMPT.to_string(),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
            verbose: false,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Read the configuration from `UNITCONV_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(format) = lookup("UNITCONV_FORMAT") {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(reason) => config.rejected.push(format!("UNITCONV_FORMAT: {}", reason)),
            }
        }

        if let Some(prompt) = lookup("UNITCONV_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(command) = lookup("UNITCONV_EXIT_COMMAND") {
            if command.is_empty() {
                config.rejected.push("UNITCONV_EXIT_COMMAND: must not be empty".to_string());
            } else {
                config.exit_command = command;
            }
        }

        if let Some(verbose) = lookup("UNITCONV_VERBOSE") {
            config.verbose = matches!(verbose.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}
