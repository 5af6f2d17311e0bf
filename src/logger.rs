use crate::common::option::GatewayOpts;
use crate::{Result, RopeeErr};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;

pub const LOG_FILE_NAME: &str = "ropee.log";

/// Install the global logger: logfmt records with time and caller, to stdout
/// or appended to `<log_file_path>/ropee.log`.
///
/// `RUST_LOG` still refines the level chosen by `--debug`.
pub fn init_logger(opts: &GatewayOpts) -> Result<()> {
    let mut builder = Builder::new();
    if opts.debug {
        builder
            .filter_level(LevelFilter::Debug)
            .filter_module("hyper", LevelFilter::Info)
            .filter_module("reqwest", LevelFilter::Info);
    } else {
        builder.filter_level(LevelFilter::Info);
    }
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "time={} level={} caller={}:{} {}",
            buf.timestamp_millis(),
            record.level().to_string().to_lowercase(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    if opts.log_to_stdout() {
        builder.target(Target::Stdout);
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(opts.log_file_path.join(LOG_FILE_NAME))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder
        .try_init()
        .map_err(|e| RopeeErr::InternalErr(e.to_string()))
}
