use crate::{Result, RopeeErr};
use clap::{App, Arg, ArgMatches};
use serde::{Deserialize, Serialize};
use std::fs::read;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SPLUNK_URL_ARG: &str = "splunk-url";
pub const SPLUNK_HEC_URL_ARG: &str = "splunk-hec-url";
pub const SPLUNK_HEC_TOKEN_ARG: &str = "splunk-hec-token";
pub const LISTEN_ADDR_ARG: &str = "listen-addr";
pub const SPLUNK_INDEX_ARG: &str = "splunk-metrics-index";
pub const SPLUNK_SOURCETYPE_ARG: &str = "splunk-metrics-sourcetype";
pub const LOG_FILE_PATH_ARG: &str = "log-file-path";
pub const TIMEOUT_ARG: &str = "timeout";
pub const DEBUG_ARG: &str = "debug";
pub const CONFIG_FILE_ARG: &str = "config";

pub const DEFAULT_SPLUNK_URL: &str = "https://127.0.0.1:8089";
pub const DEFAULT_SPLUNK_HEC_URL: &str = "https://127.0.0.1:8088";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:9970";
pub const DEFAULT_SPLUNK_INDEX: &str = "*";
pub const DEFAULT_SPLUNK_SOURCETYPE: &str = "DaoCloud_promu_metrics";
pub const DEFAULT_LOG_FILE_PATH: &str = "/var/log";
pub const DEFAULT_TIMEOUT_SECS: &str = "60";

/// Log file path that means "log to stdout".
pub const STDOUT_LOG_PATH: &str = "-";

/// Command line of `ropee-server`.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("ropee")
        .version(env!("CARGO_PKG_VERSION"))
        .about("prometheus remote storage gateway for HEC style metric stores")
        .args(&[
            Arg::with_name(SPLUNK_URL_ARG)
                .long(SPLUNK_URL_ARG)
                .takes_value(true)
                .default_value(DEFAULT_SPLUNK_URL)
                .help("Splunk Manage Url."),
            Arg::with_name(SPLUNK_HEC_URL_ARG)
                .long(SPLUNK_HEC_URL_ARG)
                .takes_value(true)
                .default_value(DEFAULT_SPLUNK_HEC_URL)
                .help("Splunk Http event collector url."),
            Arg::with_name(SPLUNK_HEC_TOKEN_ARG)
                .long(SPLUNK_HEC_TOKEN_ARG)
                .takes_value(true)
                .help("Splunk Http event collector token."),
            Arg::with_name(LISTEN_ADDR_ARG)
                .long(LISTEN_ADDR_ARG)
                .takes_value(true)
                .default_value(DEFAULT_LISTEN_ADDR)
                .help("Listen address."),
            Arg::with_name(SPLUNK_INDEX_ARG)
                .long(SPLUNK_INDEX_ARG)
                .takes_value(true)
                .default_value(DEFAULT_SPLUNK_INDEX)
                .help("Index name."),
            Arg::with_name(SPLUNK_SOURCETYPE_ARG)
                .long(SPLUNK_SOURCETYPE_ARG)
                .takes_value(true)
                .default_value(DEFAULT_SPLUNK_SOURCETYPE)
                .help("The prometheus sourcetype name."),
            Arg::with_name(LOG_FILE_PATH_ARG)
                .long(LOG_FILE_PATH_ARG)
                .takes_value(true)
                .default_value(DEFAULT_LOG_FILE_PATH)
                .help("Log files path, - for stdout."),
            Arg::with_name(TIMEOUT_ARG)
                .long(TIMEOUT_ARG)
                .takes_value(true)
                .default_value(DEFAULT_TIMEOUT_SECS)
                .help("API timeout seconds."),
            Arg::with_name(DEBUG_ARG)
                .long(DEBUG_ARG)
                .help("Debug mode."),
            Arg::with_name(CONFIG_FILE_ARG)
                .long(CONFIG_FILE_ARG)
                .takes_value(true)
                .help("Yaml config file, flags given on the command line win."),
        ])
}

/// Process wide settings, fixed once the server starts.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOpts {
    pub splunk_url: String,
    pub splunk_hec_url: String,
    pub splunk_hec_token: String,
    pub splunk_metrics_index: String,
    pub splunk_metrics_sourcetype: String,
    pub timeout: Duration,
    pub listen_addr: String,
    pub log_file_path: PathBuf,
    pub debug: bool,
}

impl Default for GatewayOpts {
    fn default() -> Self {
        GatewayOpts {
            splunk_url: DEFAULT_SPLUNK_URL.to_string(),
            splunk_hec_url: DEFAULT_SPLUNK_HEC_URL.to_string(),
            splunk_hec_token: String::new(),
            splunk_metrics_index: DEFAULT_SPLUNK_INDEX.to_string(),
            splunk_metrics_sourcetype: DEFAULT_SPLUNK_SOURCETYPE.to_string(),
            timeout: Duration::from_secs(60),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE_PATH),
            debug: false,
        }
    }
}

impl GatewayOpts {
    /// Build options from the command line. Values from `--config` are used
    /// unless the flag was given explicitly.
    pub fn get_config(matches: &ArgMatches) -> Result<GatewayOpts> {
        let file = match matches.value_of(CONFIG_FILE_ARG) {
            Some(path) => GatewayConfigFile::from_file(Path::new(path))?,
            None => GatewayConfigFile::default(),
        };

        let pick = |arg: &str, from_file: Option<String>| -> Option<String> {
            if matches.occurrences_of(arg) > 0 {
                matches.value_of(arg).map(String::from)
            } else {
                from_file.or_else(|| matches.value_of(arg).map(String::from))
            }
        };

        let timeout_str = match pick(TIMEOUT_ARG, file.timeout.map(|t| t.to_string())) {
            Some(t) => t,
            None => DEFAULT_TIMEOUT_SECS.to_string(),
        };
        let timeout_secs: u64 = timeout_str.trim().parse()?;
        if timeout_secs == 0 {
            return Err(RopeeErr::OptionErr(
                "timeout must be a positive number of seconds".to_string(),
            ));
        }

        let default = GatewayOpts::default();
        Ok(GatewayOpts {
            splunk_url: pick(SPLUNK_URL_ARG, file.splunk_url).unwrap_or(default.splunk_url),
            splunk_hec_url: pick(SPLUNK_HEC_URL_ARG, file.splunk_hec_url)
                .unwrap_or(default.splunk_hec_url),
            splunk_hec_token: pick(SPLUNK_HEC_TOKEN_ARG, file.splunk_hec_token)
                .unwrap_or(default.splunk_hec_token),
            splunk_metrics_index: pick(SPLUNK_INDEX_ARG, file.splunk_metrics_index)
                .unwrap_or(default.splunk_metrics_index),
            splunk_metrics_sourcetype: pick(SPLUNK_SOURCETYPE_ARG, file.splunk_metrics_sourcetype)
                .unwrap_or(default.splunk_metrics_sourcetype),
            timeout: Duration::from_secs(timeout_secs),
            listen_addr: pick(LISTEN_ADDR_ARG, file.listen_addr).unwrap_or(default.listen_addr),
            log_file_path: pick(LOG_FILE_PATH_ARG, file.log_file_path)
                .map(PathBuf::from)
                .unwrap_or(default.log_file_path),
            debug: matches.is_present(DEBUG_ARG) || file.debug.unwrap_or(false),
        })
    }

    pub fn log_to_stdout(&self) -> bool {
        self.log_file_path == Path::new(STDOUT_LOG_PATH)
    }
}

/// Optional yaml config file, same keys as the flags in snake case.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GatewayConfigFile {
    #[serde(default)]
    pub splunk_url: Option<String>,
    #[serde(default)]
    pub splunk_hec_url: Option<String>,
    #[serde(default)]
    pub splunk_hec_token: Option<String>,
    #[serde(default)]
    pub splunk_metrics_index: Option<String>,
    #[serde(default)]
    pub splunk_metrics_sourcetype: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub listen_addr: Option<String>,
    #[serde(default)]
    pub log_file_path: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
}

impl GatewayConfigFile {
    pub fn from_file(filepath: &Path) -> Result<GatewayConfigFile> {
        let content = read(filepath)?;
        let config_file: GatewayConfigFile = serde_yaml::from_slice(content.as_slice())?;
        Ok(config_file)
    }
}

#[cfg(test)]
mod tests {
    use crate::option::{app, GatewayConfigFile, GatewayOpts};
    use crate::{Result, RopeeErr};
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() -> Result<()> {
        let matches = app().get_matches_from(vec!["ropee-server"]);
        let opts = GatewayOpts::get_config(&matches)?;
        assert_eq!(opts, GatewayOpts::default());
        Ok(())
    }

    #[test]
    fn test_flags() -> Result<()> {
        let matches = app().get_matches_from(vec![
            "ropee-server",
            "--timeout",
            "5",
            "--splunk-metrics-index",
            "prom",
            "--log-file-path",
            "-",
            "--debug",
        ]);
        let opts = GatewayOpts::get_config(&matches)?;
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.splunk_metrics_index, "prom");
        assert!(opts.log_to_stdout());
        assert!(opts.debug);
        Ok(())
    }

    #[test]
    fn test_zero_timeout() {
        let matches = app().get_matches_from(vec!["ropee-server", "--timeout", "0"]);
        match GatewayOpts::get_config(&matches) {
            Err(RopeeErr::OptionErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_config_file_and_override() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "splunk_hec_token: abc\ntimeout: 7\nlisten_addr: 0.0.0.0:1234\nlog_file_path: /tmp"
        )?;
        let path = file.path().to_str().unwrap().to_string();
        let matches = app().get_matches_from(vec![
            "ropee-server",
            "--config",
            &path,
            "--listen-addr",
            "127.0.0.1:4321",
        ]);
        let opts = GatewayOpts::get_config(&matches)?;
        assert_eq!(opts.splunk_hec_token, "abc");
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.listen_addr, "127.0.0.1:4321");
        assert_eq!(opts.log_file_path, PathBuf::from("/tmp"));
        Ok(())
    }

    #[test]
    fn test_read_yaml_file() -> Result<()> {
        let config_file = GatewayConfigFile {
            splunk_url: Some("https://splunk:8089".to_string()),
            ..Default::default()
        };
        let res = serde_yaml::to_string(&config_file)?;
        assert!(res.contains("splunk_url"));
        Ok(())
    }
}
