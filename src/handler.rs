use crate::backend::{Backend, BackendBuilder, ClientOpts, Credentials};
use crate::codec::{self, CONTENT_ENCODING, CONTENT_TYPE};
use crate::common::option::GatewayOpts;
use crate::common::query::ReadQuery;
use crate::common::time_series::WriteBatch;
use crate::metrics::Metrics;
use crate::{Result, RopeeErr};
use std::fmt;
use std::io::Read;
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Body answered to an accepted remote write.
pub const WRITE_ACK: &str = "ok";

const WRITE_ACTION: &str = "write";
const READ_ACTION: &str = "read";

/// Where a request failed, reported in the error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadBody,
    Decode,
    Construct,
    Backend,
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ReadBody => "read_body",
            Stage::Decode => "decode",
            Stage::Construct => "construct",
            Stage::Backend => "backend",
            Stage::Encode => "encode",
        };
        f.write_str(name)
    }
}

/// Transport independent answer of a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl GatewayResponse {
    pub fn text(status: u16, body: &str) -> GatewayResponse {
        GatewayResponse {
            status,
            headers: vec![("Content-Type", "text/plain; charset=utf-8".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(err: &RopeeErr) -> GatewayResponse {
        GatewayResponse::text(err.status_code(), &err.to_string())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Request lifecycle of the remote write and remote read endpoints.
///
/// The write handle is built once from the static credentials of the
/// options and shared by every write. Reads build a fresh handle carrying the
/// caller's basic auth credentials and drop it when the request ends.
pub struct Gateway {
    opts: GatewayOpts,
    builder: Arc<dyn BackendBuilder>,
    write_backend: std::result::Result<Arc<dyn Backend>, RopeeErr>,
    metrics: Arc<Metrics>,
}

impl Gateway {
    /// A write handle that cannot be built is not fatal: it is logged and
    /// every write is answered with the construction error.
    pub fn new(opts: GatewayOpts, builder: Arc<dyn BackendBuilder>, metrics: Arc<Metrics>) -> Gateway {
        let write_opts = ClientOpts::from_gateway_opts(&opts, Credentials::default());
        let write_backend = match builder.build(&write_opts) {
            Ok(backend) => Ok(Arc::from(backend)),
            Err(e) => {
                log_failure(WRITE_ACTION, Stage::Construct, &e);
                Err(e)
            }
        };
        Gateway {
            opts,
            builder,
            write_backend,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Handle `POST /write`. Caller credentials are never looked at.
    pub fn handle_write(&self, body: &mut dyn Read) -> GatewayResponse {
        let compressed = match read_body(body) {
            Ok(c) => c,
            Err(e) => return fail(WRITE_ACTION, Stage::ReadBody, e),
        };
        let batch: WriteBatch = match codec::decode(&compressed) {
            Ok(b) => b,
            Err(e) => return fail(WRITE_ACTION, Stage::Decode, e),
        };
        self.metrics.write_requests.inc();
        debug!(
            "action={} series={} samples={}",
            WRITE_ACTION,
            batch.series.len(),
            batch.sample_count()
        );

        let backend = match &self.write_backend {
            Ok(b) => b.clone(),
            Err(e) => {
                log_failure(WRITE_ACTION, Stage::Construct, e);
                return GatewayResponse::error(e);
            }
        };
        if let Err(e) = call_with_timeout(self.opts.timeout, move || backend.write(&batch)) {
            return fail(WRITE_ACTION, Stage::Backend, e);
        }
        GatewayResponse::text(200, WRITE_ACK)
    }

    /// Handle `POST /read`. `authorization` is the raw header value, if any.
    pub fn handle_read(&self, body: &mut dyn Read, authorization: Option<&str>) -> GatewayResponse {
        let compressed = match read_body(body) {
            Ok(c) => c,
            Err(e) => return fail(READ_ACTION, Stage::ReadBody, e),
        };
        let query: ReadQuery = match codec::decode(&compressed) {
            Ok(q) => q,
            Err(e) => return fail(READ_ACTION, Stage::Decode, e),
        };
        self.metrics.read_requests.inc();
        debug!("action={} query={:?}", READ_ACTION, query);

        let credentials = Credentials::from_basic_auth(authorization);
        let backend = match self
            .builder
            .build(&ClientOpts::from_gateway_opts(&self.opts, credentials))
        {
            Ok(b) => b,
            Err(e) => return fail(READ_ACTION, Stage::Construct, e),
        };

        let expected = query.queries.len();
        let result = match call_with_timeout(self.opts.timeout, move || backend.read(&query)) {
            Ok(r) => r,
            Err(e) => return fail(READ_ACTION, Stage::Backend, e),
        };
        if result.results.len() != expected {
            return fail(
                READ_ACTION,
                Stage::Backend,
                RopeeErr::BackendErr(format!(
                    "backend answered {} results for {} queries",
                    result.results.len(),
                    expected
                )),
            );
        }

        let encoded = match codec::encode(&result) {
            Ok(e) => e,
            Err(e) => return fail(READ_ACTION, Stage::Encode, e),
        };
        GatewayResponse {
            status: 200,
            headers: vec![
                ("Content-Type", CONTENT_TYPE.to_string()),
                ("Content-Encoding", CONTENT_ENCODING.to_string()),
            ],
            body: encoded,
        }
    }
}

fn read_body(body: &mut dyn Read) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    Ok(buf)
}

fn fail(action: &str, stage: Stage, err: RopeeErr) -> GatewayResponse {
    log_failure(action, stage, &err);
    GatewayResponse::error(&err)
}

fn log_failure(action: &str, stage: Stage, err: &RopeeErr) {
    error!("action={} stage={} err={:?}", action, stage, err.to_string());
}

/// Run a backend call, giving up once `timeout` elapsed.
///
/// The call keeps running on its own thread after a timeout; its result is
/// dropped. Nothing is rolled back inside the backend.
pub fn call_with_timeout<T, F>(timeout: Duration, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (sender, receiver) = channel::<Result<T>>();
    thread::Builder::new()
        .name("backend-call".to_string())
        .spawn(move || {
            let _ = sender.send(f());
        })
        .map_err(|e| RopeeErr::InternalErr(format!("cannot spawn backend call: {}", e)))?;
    match receiver.recv_timeout(timeout) {
        Ok(res) => res,
        Err(RecvTimeoutError::Timeout) => Err(RopeeErr::TimeoutErr(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(RopeeErr::InternalErr(
            "backend call ended without a result".to_string(),
        )),
    }
}

#[cfg(test)]
mod test {
    use crate::backend::{Backend, BackendBuilder, ClientOpts, Credentials};
    use crate::codec::{decode, encode};
    use crate::common::label::{Label, Labels};
    use crate::common::query::{LabelMatcher, MatchType, Query, QueryResult, ReadQuery, ReadResult};
    use crate::common::test_utils::RecordingBuilder;
    use crate::common::time_series::{TimeSeries, WriteBatch};
    use crate::handler::{call_with_timeout, Gateway, WRITE_ACK};
    use crate::metrics::Metrics;
    use crate::option::GatewayOpts;
    use crate::{Result, RopeeErr};
    use std::io::{self, Read};
    use std::sync::mpsc::channel;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn gateway(builder: Arc<dyn BackendBuilder>, timeout: Duration) -> (Gateway, Arc<Metrics>) {
        let metrics = Arc::new(Metrics::new());
        let opts = GatewayOpts {
            timeout,
            ..Default::default()
        };
        (Gateway::new(opts, builder, metrics.clone()), metrics)
    }

    fn up_batch() -> WriteBatch {
        let mut series = TimeSeries::new(Labels::from(vec![Label::from("__name__", "up")]));
        series.add(1000, 1.0);
        WriteBatch::new(vec![series])
    }

    fn up_query() -> ReadQuery {
        ReadQuery::new(vec![Query::new(
            0,
            2000,
            vec![LabelMatcher::new(MatchType::Equal, "__name__", "up")],
        )])
    }

    struct BrokenReader {}

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"))
        }
    }

    #[test]
    fn test_write_ok() -> Result<()> {
        let builder = RecordingBuilder::new();
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_batch())?;
        let resp = gateway.handle_write(&mut body.as_slice());

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, WRITE_ACK.as_bytes());
        assert_eq!(metrics.write_requests.get(), 1);
        let recorded = builder.recorded();
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.writes, vec![up_batch()]);
        // the write handle is built once, with the static credentials
        assert_eq!(recorded.built_with, vec![Credentials::default()]);
        Ok(())
    }

    #[test]
    fn test_write_handle_reused() -> Result<()> {
        let builder = RecordingBuilder::new();
        let (gateway, _) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        for _ in 0..3 {
            let body = encode(&up_batch())?;
            assert_eq!(gateway.handle_write(&mut body.as_slice()).status, 200);
        }
        assert_eq!(builder.build_count(), 1);
        assert_eq!(builder.call_count(), 3);
        Ok(())
    }

    #[test]
    fn test_malformed_write_short_circuit() {
        let builder = RecordingBuilder::new();
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let resp = gateway.handle_write(&mut &b"not snappy at all"[..]);

        assert_eq!(resp.status, 400);
        assert_eq!(builder.call_count(), 0);
        assert_eq!(metrics.write_requests.get(), 0);
    }

    #[test]
    fn test_write_body_read_failure() {
        let builder = RecordingBuilder::new();
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let resp = gateway.handle_write(&mut BrokenReader {});

        assert_eq!(resp.status, 500);
        assert_eq!(builder.call_count(), 0);
        assert_eq!(metrics.write_requests.get(), 0);
    }

    #[test]
    fn test_write_backend_failure_counted() -> Result<()> {
        let builder = RecordingBuilder::new().failing_call("index prom is read only");
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_batch())?;
        let resp = gateway.handle_write(&mut body.as_slice());

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, b"index prom is read only".to_vec());
        assert_eq!(metrics.write_requests.get(), 1);
        Ok(())
    }

    #[test]
    fn test_write_construction_failure() -> Result<()> {
        let builder = RecordingBuilder::new().failing_build("bad url");
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_batch())?;
        let resp = gateway.handle_write(&mut body.as_slice());

        assert_eq!(resp.status, 500);
        assert_eq!(
            String::from_utf8_lossy(&resp.body),
            "cannot build backend client: bad url"
        );
        assert_eq!(metrics.write_requests.get(), 1);
        assert_eq!(builder.call_count(), 0);

        // the stored error answers every later write the same way
        let again = gateway.handle_write(&mut body.as_slice());
        assert_eq!(again, resp);
        assert_eq!(builder.build_count(), 1);
        Ok(())
    }

    #[test]
    fn test_read_ok() -> Result<()> {
        let mut series = TimeSeries::new(Labels::from(vec![Label::from("__name__", "up")]));
        series.add(1000, 1.0);
        let builder = RecordingBuilder::new().with_series(vec![series.clone()]);
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_query())?;
        let resp = gateway.handle_read(&mut body.as_slice(), None);

        assert_eq!(resp.status, 200);
        assert_eq!(resp.header("content-type"), Some("application/x-protobuf"));
        assert_eq!(resp.header("Content-Encoding"), Some("snappy"));
        let result: ReadResult = decode(&resp.body)?;
        assert_eq!(result, ReadResult::new(vec![QueryResult::new(vec![series])]));
        assert_eq!(metrics.read_requests.get(), 1);
        assert_eq!(builder.recorded().lock().unwrap().reads, vec![up_query()]);
        Ok(())
    }

    #[test]
    fn test_read_credentials_passthrough() -> Result<()> {
        let builder = RecordingBuilder::new();
        let (gateway, _) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));

        let body = encode(&up_query())?;
        assert_eq!(gateway.handle_read(&mut body.as_slice(), Some("Basic dTpw")).status, 200);
        assert_eq!(gateway.handle_read(&mut body.as_slice(), None).status, 200);

        let recorded = builder.recorded();
        let recorded = recorded.lock().unwrap();
        // write handle first, then one fresh handle per read
        assert_eq!(
            recorded.built_with,
            vec![Credentials::default(), Credentials::new("u", "p"), Credentials::new("", "")]
        );
        Ok(())
    }

    #[test]
    fn test_malformed_read_short_circuit() -> Result<()> {
        let builder = RecordingBuilder::new();
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_query())?;
        let resp = gateway.handle_read(&mut &body[..body.len() - 1], Some("Basic dTpw"));

        assert_eq!(resp.status, 400);
        assert_eq!(builder.build_count(), 1);
        assert_eq!(builder.call_count(), 0);
        assert_eq!(metrics.read_requests.get(), 0);
        Ok(())
    }

    #[test]
    fn test_read_construction_failure() -> Result<()> {
        let builder = RecordingBuilder::new().failing_build("malformed url");
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_query())?;
        let resp = gateway.handle_read(&mut body.as_slice(), None);

        assert_eq!(resp.status, 500);
        assert_eq!(builder.call_count(), 0);
        assert_eq!(metrics.read_requests.get(), 1);
        Ok(())
    }

    #[test]
    fn test_read_backend_failure_verbatim() -> Result<()> {
        let builder = RecordingBuilder::new().failing_call("Search auth failed");
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_secs(5));
        let body = encode(&up_query())?;
        let resp = gateway.handle_read(&mut body.as_slice(), None);

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, b"Search auth failed".to_vec());
        assert_eq!(metrics.read_requests.get(), 1);
        Ok(())
    }

    #[test]
    fn test_timeout_enforced() -> Result<()> {
        let builder = RecordingBuilder::new().delayed(Duration::from_secs(3));
        let (gateway, metrics) = gateway(Arc::new(builder.clone()), Duration::from_millis(200));

        let start = Instant::now();
        let body = encode(&up_query())?;
        let resp = gateway.handle_read(&mut body.as_slice(), None);
        assert_eq!(resp.status, 500);
        assert!(String::from_utf8_lossy(&resp.body).contains("timed out"));
        assert!(start.elapsed() < Duration::from_secs(2));

        let start = Instant::now();
        let body = encode(&up_batch())?;
        assert_eq!(gateway.handle_write(&mut body.as_slice()).status, 500);
        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(metrics.read_requests.get(), 1);
        assert_eq!(metrics.write_requests.get(), 1);
        Ok(())
    }

    #[test]
    fn test_call_with_timeout() {
        assert_eq!(call_with_timeout(Duration::from_secs(1), || Ok(7)).unwrap(), 7);
        match call_with_timeout(Duration::from_millis(50), || {
            thread::sleep(Duration::from_millis(500));
            Ok(())
        }) {
            Err(RopeeErr::TimeoutErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    /// Answers every query on its own thread, later queries finish first.
    struct ConcurrentBackend {}

    impl Backend for ConcurrentBackend {
        fn write(&self, _batch: &WriteBatch) -> Result<()> {
            Ok(())
        }

        fn read(&self, query: &ReadQuery) -> Result<ReadResult> {
            let (tx, rx) = channel();
            let total = query.queries.len();
            for (idx, q) in query.queries.iter().enumerate() {
                let tx = tx.clone();
                let name = q.matchers[0].value.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(50 * (total - idx) as u64));
                    let mut series = TimeSeries::new(Labels::from(vec![Label::from("__name__", &name)]));
                    series.add(1000, idx as f64);
                    tx.send((idx, QueryResult::new(vec![series]))).unwrap();
                });
            }
            let mut slots: Vec<Option<QueryResult>> = vec![None; total];
            let mut completion = Vec::new();
            for _ in 0..total {
                let (idx, res) = rx.recv().unwrap();
                completion.push(idx);
                slots[idx] = Some(res);
            }
            assert_eq!(completion, vec![1, 0]);
            Ok(ReadResult::new(slots.into_iter().map(|s| s.unwrap()).collect()))
        }
    }

    struct ConcurrentBuilder {}

    impl BackendBuilder for ConcurrentBuilder {
        fn build(&self, _opts: &ClientOpts) -> Result<Box<dyn Backend>> {
            Ok(Box::new(ConcurrentBackend {}))
        }
    }

    #[test]
    fn test_read_preserves_query_order() -> Result<()> {
        let (gateway, _) = gateway(Arc::new(ConcurrentBuilder {}), Duration::from_secs(5));
        let query = ReadQuery::new(vec![
            Query::new(0, 2000, vec![LabelMatcher::new(MatchType::Equal, "__name__", "q1")]),
            Query::new(0, 2000, vec![LabelMatcher::new(MatchType::Equal, "__name__", "q2")]),
        ]);
        let body = encode(&query)?;
        let resp = gateway.handle_read(&mut body.as_slice(), None);
        assert_eq!(resp.status, 200);

        let result: ReadResult = decode(&resp.body)?;
        let names: Vec<&str> = result
            .results
            .iter()
            .map(|r| r.series[0].labels().get("__name__").unwrap())
            .collect();
        assert_eq!(names, vec!["q1", "q2"]);
        Ok(())
    }

    struct ShortBackend {}

    impl Backend for ShortBackend {
        fn write(&self, _batch: &WriteBatch) -> Result<()> {
            Ok(())
        }

        fn read(&self, _query: &ReadQuery) -> Result<ReadResult> {
            Ok(ReadResult::default())
        }
    }

    struct ShortBuilder {}

    impl BackendBuilder for ShortBuilder {
        fn build(&self, _opts: &ClientOpts) -> Result<Box<dyn Backend>> {
            Ok(Box::new(ShortBackend {}))
        }
    }

    #[test]
    fn test_read_result_count_mismatch() -> Result<()> {
        let (gateway, _) = gateway(Arc::new(ShortBuilder {}), Duration::from_secs(5));
        let body = encode(&up_query())?;
        assert_eq!(gateway.handle_read(&mut body.as_slice(), None).status, 500);
        Ok(())
    }
}
