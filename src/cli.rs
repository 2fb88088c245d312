use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the GeneratedAllocations contract from allocations JSON")]
pub struct Cli {
    /// Input allocations .json file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Output .sol file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Log every category and the bytes written
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.input, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_default_paths() {
        let cli = Cli::try_parse_from(["allocgen"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn positional_paths_override_defaults() {
        let cli = Cli::try_parse_from(["allocgen", "-v", "in.json", "out/Alloc.sol"]).unwrap();
        assert_eq!(cli.config(), Config::new("in.json", "out/Alloc.sol"));
        assert!(cli.verbose);
    }
}
