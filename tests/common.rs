use ropee::option::GatewayOpts;
use ropee::test_utils::RecordingBuilder;
use ropee::{Gateway, Label, Labels, LabelMatcher, MatchType, Metrics, Query, ReadQuery, RopeeServer, TimeSeries, WriteBatch};
use std::sync::Arc;
use std::thread;

/// Serve a gateway backed by `builder` on an ephemeral port.
pub fn start_server(builder: RecordingBuilder) -> (Arc<RopeeServer>, String) {
    let metrics = Arc::new(Metrics::new());
    let gateway = Gateway::new(GatewayOpts::default(), Arc::new(builder), metrics);
    let server = Arc::new(RopeeServer::bind("127.0.0.1:0", gateway).unwrap());
    let addr = server.local_addr().unwrap();
    let serving = server.clone();
    thread::spawn(move || serving.serve());
    (server, format!("http://{}", addr))
}

pub fn up_series() -> TimeSeries {
    let mut series = TimeSeries::new(Labels::from(vec![Label::from("__name__", "up")]));
    series.add(1000, 1.0);
    series
}

pub fn up_batch() -> WriteBatch {
    WriteBatch::new(vec![up_series()])
}

pub fn up_query() -> ReadQuery {
    ReadQuery::new(vec![Query::new(
        0,
        2000,
        vec![LabelMatcher::new(MatchType::Equal, "__name__", "up")],
    )])
}
