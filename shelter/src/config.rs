use clap::Parser;
use shelter_core::auth::client::DEFAULT_SERVER;
use std::path::PathBuf;

/// Log into the Shelter Market from your terminal
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// The auth server to log into
    #[clap(long, env = "SHELTER_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Where should we write logs?
    #[clap(long, env = "SHELTER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Also show toasts as desktop notifications
    #[clap(long)]
    pub desktop_notifications: bool,
}

impl Config {
    /// Get either the configured or a default log directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("market", "shelter", "shelter")
                    .map(|dirs| dirs.data_local_dir().join("logs"))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_the_shelter_api() {
        let config = Config::try_parse_from(["shelter"]).unwrap();

        assert_eq!(config.server, "http://api.localhost");
        assert!(!config.desktop_notifications);
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config = Config::try_parse_from(["shelter", "--log-dir", "/tmp/shelter"]).unwrap();

        assert_eq!(config.log_dir(), PathBuf::from("/tmp/shelter"));
    }
}
