use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::codegen::generator::GeneratorOptions;

pub const DEFAULT_CONFIG_FILE: &str = "bounds-header.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "bounds-header",
    version,
    about = "Generate a C bounds header from a design scene tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: bounds-header.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the bounds header for a scene selection
    Generate {
        /// Exported scene file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Output header path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Top-level identifier prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Include-guard macro stem
        #[arg(long)]
        guard: Option<String>,

        /// Also write a JSON manifest of identifiers and bounds
        #[arg(long)]
        manifest: Option<String>,
    },

    /// Answer generate/cancel requests as JSON lines on stdin/stdout
    Serve {
        /// Exported scene file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Top-level identifier prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Include-guard macro stem
        #[arg(long)]
        guard: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `bounds-header.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerateConfig {
    pub prefix: Option<String>,
    pub guard: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve generator options: CLI > config > defaults.
pub fn build_generator_options(
    config: &AppConfig,
    prefix: Option<&str>,
    guard: Option<&str>,
) -> GeneratorOptions {
    let defaults = GeneratorOptions::default();
    GeneratorOptions {
        prefix: prefix
            .or(config.generate.prefix.as_deref())
            .map(str::to_string)
            .unwrap_or(defaults.prefix),
        guard: guard
            .or(config.generate.guard.as_deref())
            .map(str::to_string)
            .unwrap_or(defaults.guard),
    }
}
