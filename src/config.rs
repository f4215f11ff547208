use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

use crate::formatter::DEFAULT_PRECISION;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings of the interactive shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Input line that ends the session
    #[serde(default = "default_exit_command")]
    pub exit_command: String,

    #[serde(default = "default_banner")]
    pub banner: String,

    #[serde(default = "default_stack_label")]
    pub stack_label: String,

    /// Maximum fractional digits shown for stack values
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_command: default_exit_command(),
            banner: default_banner(),
            stack_label: default_stack_label(),
            precision: default_precision(),
        }
    }
}

impl ShellConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads `path` when it exists, falling back to the defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_prompt() -> String {
    ">  ".to_string()
}

fn default_exit_command() -> String {
    "exit".to_string()
}

fn default_banner() -> String {
    "Enter RPN expression, or 'exit' to exit the program.".to_string()
}

fn default_stack_label() -> String {
    "stack:  ".to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}
