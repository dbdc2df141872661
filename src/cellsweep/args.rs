use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.2.1" for releases, "0.2.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cellsweep", bin_name = "cellsweep", version = get_version())]
#[command(
    about = "Runs cellbender remove-background with a derived expected-cell count",
    long_about = None
)]
pub struct Cli {
    /// Path to the raw (unfiltered) 10x h5 matrix, forwarded to cellbender
    #[arg(long = "raw_h5", value_name = "PATH")]
    pub raw_h5: PathBuf,

    /// Path to the filtered 10x h5 matrix, read to estimate the cell count
    #[arg(long = "filtered_h5", value_name = "PATH")]
    pub filtered_h5: PathBuf,

    /// Path where cellbender writes its output h5
    #[arg(long = "output_h5", value_name = "PATH")]
    pub output_h5: PathBuf,

    /// Estimate of the total number of droplets, including empty ones
    #[arg(long = "total_droplets_included", value_name = "N", default_value_t = 2000)]
    pub total_droplets_included: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "cellsweep",
        "--raw_h5",
        "raw.h5",
        "--filtered_h5",
        "filtered.h5",
        "--output_h5",
        "out.h5",
    ];

    #[test]
    fn total_droplets_defaults_to_2000() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        assert_eq!(cli.total_droplets_included, 2000);
    }

    #[test]
    fn total_droplets_override() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["--total_droplets_included", "500"]);
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.total_droplets_included, 500);
    }

    #[test]
    fn filtered_h5_is_required() {
        let argv = ["cellsweep", "--raw_h5", "raw.h5", "--output_h5", "out.h5"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
