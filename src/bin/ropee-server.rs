use ropee::option::{app, GatewayOpts};
use ropee::{init_logger, Gateway, HecBackendBuilder, Metrics, RopeeServer};
use std::process;
use std::sync::Arc;

#[macro_use]
extern crate log;

///
/// Binary command line wrapper for the gateway
/// see `ropee-server --help` for the flags, `--config` reads the same
/// settings from a yaml file
///
fn main() {
    let matches = app().get_matches();
    let options = match GatewayOpts::get_config(&matches) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Cannot read config: {}", e);
            process::exit(2);
        }
    };
    if let Err(e) = init_logger(&options) {
        eprintln!("Cannot init logger: {}", e);
        process::exit(2);
    }

    let metrics = Arc::new(Metrics::new());
    let gateway = Gateway::new(options.clone(), Arc::new(HecBackendBuilder::new()), metrics);
    let server = match RopeeServer::bind(&options.listen_addr, gateway) {
        Ok(s) => s,
        Err(e) => {
            error!("action=serve err={:?}", e.to_string());
            process::exit(1);
        }
    };
    info!(
        "msg=\"starting server...\" listen={}",
        server
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or(options.listen_addr)
    );
    server.serve();
}
