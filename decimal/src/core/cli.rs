use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{APP_NAME_LOWER, ENV_CONFIG, ENV_DATABASE_URL};

#[derive(Parser)]
#[command(name = APP_NAME_LOWER)]
#[command(version, about = "Filter and search decimal attribute columns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Database URL (SQLite path or postgres:// URL)
    #[arg(long, global = true, env = ENV_DATABASE_URL)]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List ids of rows whose value is greater than VALUE
    Gt {
        /// Attribute name (or column name) from the config
        #[arg(long, short = 'a')]
        attribute: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Include rows equal to VALUE
        #[arg(long, short = 'i')]
        inclusive: bool,
    },
    /// List ids of rows whose value is less than VALUE
    Lt {
        #[arg(long, short = 'a')]
        attribute: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, short = 'i')]
        inclusive: bool,
    },
    /// List ids of rows whose value differs from VALUE
    Ne {
        #[arg(long, short = 'a')]
        attribute: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Search by number, or by pattern with * and ? wildcards
    Search {
        #[arg(long, short = 'a')]
        attribute: String,
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },
    /// Print column type, setting names and field definition
    Describe {
        #[arg(long, short = 'a')]
        attribute: String,
    },
}

impl Commands {
    /// Attribute the command operates on
    pub fn attribute(&self) -> &str {
        match self {
            Commands::Gt { attribute, .. }
            | Commands::Lt { attribute, .. }
            | Commands::Ne { attribute, .. }
            | Commands::Search { attribute, .. }
            | Commands::Describe { attribute } => attribute,
        }
    }
}

/// CLI values that feed configuration loading
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub database_url: Option<String>,
}

impl Cli {
    pub fn config(&self) -> CliConfig {
        CliConfig {
            config: self.config.clone(),
            database_url: self.database_url.clone(),
        }
    }
}
