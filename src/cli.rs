use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "meteogram-tui", version, about = "Interactive terminal meteogram")]
pub struct Cli {
    /// Forecast payload JSON file (parallel-array format)
    #[arg(long, value_name = "FILE", conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Render the built-in demo forecast (the default without --input)
    #[arg(long)]
    pub demo: bool,

    /// Unit system for labels
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Skip loading and saving persisted settings
    #[arg(long)]
    pub no_persist: bool,
}
