use clap::Parser;
use std::path::PathBuf;

pub const SERVER_ADDRESS_ENV: &str = "SERVER_ADDRESS";
pub const BASE_URL_ENV: &str = "BASE_URL";
pub const FILE_STORAGE_PATH_ENV: &str = "FILE_STORAGE_PATH";

pub const DEFAULT_SERVER_ADDRESS: &str = "localhost:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "shortwave")]
pub struct Cli {
    /// Address the HTTP server binds to.
    #[arg(short = 'a', long, env = SERVER_ADDRESS_ENV, default_value = DEFAULT_SERVER_ADDRESS)]
    pub server_address: String,

    /// Public base URL used to build short links.
    #[arg(short = 'b', long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// JSON file backing the store; omit to keep records in memory only.
    #[arg(short = 'f', long, env = FILE_STORAGE_PATH_ENV)]
    pub file_storage_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::parse_from(["shortwave"]);

        assert_eq!(cli.server_address, DEFAULT_SERVER_ADDRESS);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.file_storage_path, None);
    }

    #[test]
    fn short_flags_override_defaults() {
        let cli = Cli::parse_from([
            "shortwave",
            "-a",
            "0.0.0.0:9090",
            "-b",
            "https://sw.example",
            "-f",
            "/tmp/records.json",
        ]);

        assert_eq!(cli.server_address, "0.0.0.0:9090");
        assert_eq!(cli.base_url, "https://sw.example");
        assert_eq!(
            cli.file_storage_path,
            Some(PathBuf::from("/tmp/records.json"))
        );
    }
}
