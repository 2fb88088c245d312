use std::path::PathBuf;

/// Where the dataset is read from when no path is given.
pub const DEFAULT_INPUT: &str = "script/data/allocations.json";
/// Where the contract is written when no path is given.
pub const DEFAULT_OUTPUT: &str = "script/generatedAllocations.sol";

/// Input/output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_points_at_script_directory() {
        let config = Config::default();
        assert_eq!(config.input_path, Path::new("script/data/allocations.json"));
        assert_eq!(config.output_path, Path::new("script/generatedAllocations.sol"));
    }
}
