use crate::backend::{Backend, BackendBuilder, ClientOpts, Credentials};
use crate::common::label::{Label, Labels, METRIC_NAME_LABEL};
use crate::common::query::{LabelMatcher, MatchType, Query, QueryResult, ReadQuery, ReadResult};
use crate::common::time_point::{TimePoint, Timestamp};
use crate::common::time_series::{TimeSeries, WriteBatch};
use crate::{Result, RopeeErr};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::time::Duration;

const HEC_PATH: &str = "services/collector";
const EXPORT_PATH: &str = "services/search/jobs/export";
const EVENT_SOURCE: &str = "ropee";
const ALL_INDEXES: &str = "*";

const METRIC_NAME_FIELD: &str = "metric_name";
const VALUE_FIELD: &str = "_value";
const TIMESTAMP_FIELD: &str = "ts";

/// Fields the store adds to every data point, never label dimensions.
const RESERVED_FIELDS: [&str; 8] = [
    "host",
    "index",
    "source",
    "sourcetype",
    "splunk_server",
    "linecount",
    "punct",
    TIMESTAMP_FIELD,
];

/// Client of a Splunk style store: writes go to the HTTP event collector,
/// reads run a metric search through the management port.
///
/// Holds no mutable state after construction, so one instance can serve
/// concurrent callers.
pub struct HecBackend {
    client: Client,
    hec_endpoint: Url,
    export_endpoint: Url,
    hec_token: String,
    index: String,
    source_type: String,
    credentials: Credentials,
    timeout: Duration,
}

impl HecBackend {
    pub fn new(opts: &ClientOpts) -> Result<HecBackend> {
        let hec_endpoint = join_base_url(&opts.hec_url, HEC_PATH)?;
        let export_endpoint = join_base_url(&opts.url, EXPORT_PATH)?;
        let client = Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| RopeeErr::ConstructionErr(e.to_string()))?;
        Ok(HecBackend {
            client,
            hec_endpoint,
            export_endpoint,
            hec_token: opts.hec_token.clone(),
            index: opts.index.clone(),
            source_type: opts.source_type.clone(),
            credentials: opts.credentials.clone(),
            timeout: opts.timeout,
        })
    }

    /// Newline delimited HEC metric events, one per sample.
    ///
    /// Fails before any I/O when a series has no metric name, so a batch is
    /// either sent whole or not at all.
    fn events(&self, batch: &WriteBatch) -> Result<String> {
        let mut body = String::new();
        for series in batch.series.iter() {
            let name = series.labels().get(METRIC_NAME_LABEL).ok_or_else(|| {
                RopeeErr::BackendErr(format!(
                    "series {:?} has no {} label",
                    series.labels(),
                    METRIC_NAME_LABEL
                ))
            })?;
            let mut fields = Map::new();
            fields.insert(METRIC_NAME_FIELD.to_string(), json!(name));
            for label in series.labels().vec() {
                if label.name() != METRIC_NAME_LABEL {
                    fields.insert(label.name().clone(), json!(label.value()));
                }
            }
            for point in series.time_points() {
                // staleness markers and infinities have no numeric form in the store
                if !point.value.is_finite() {
                    continue;
                }
                let mut point_fields = fields.clone();
                point_fields.insert(VALUE_FIELD.to_string(), json!(point.value));
                let mut event = json!({
                    "time": point.timestamp as f64 / 1000.0,
                    "event": "metric",
                    "source": EVENT_SOURCE,
                    "sourcetype": self.source_type,
                    "fields": point_fields,
                });
                if self.index != ALL_INDEXES {
                    event["index"] = json!(self.index);
                }
                body.push_str(&serde_json::to_string(&event)?);
                body.push('\n');
            }
        }
        Ok(body)
    }

    /// SPL for one query. Only positive equality matchers are pushed down,
    /// every matcher is re-checked on the returned series.
    fn search(&self, query: &Query) -> String {
        let mut filter = vec![format!("sourcetype={}", quote(&self.source_type))];
        for m in query.matchers.iter() {
            if m.match_type == MatchType::Equal && !m.value.is_empty() {
                filter.push(format!("{}={}", field_name(&m.name), quote(&m.value)));
            }
        }
        format!(
            "| mpreview index={} filter={} earliest={} latest={} | eval {}=_time*1000 | fields - _raw",
            self.index,
            quote(&filter.join(" ")),
            epoch_secs(query.start),
            epoch_secs(query.end.saturating_add(1)),
            TIMESTAMP_FIELD,
        )
    }

    fn read_one(&self, query: &Query) -> Result<QueryResult> {
        let spl = self.search(query);
        debug!("action=read spl={:?}", spl);
        let request = self
            .client
            .post(self.export_endpoint.clone())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .form(&[("search", spl.as_str()), ("output_mode", "json")]);
        let text = self.send(request)?;
        parse_export(&text, query)
    }

    fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().map_err(|e| self.classify(e))?;
        let status = response.status();
        let text = response.text().map_err(|e| self.classify(e))?;
        if !status.is_success() {
            return Err(RopeeErr::BackendErr(format!("{}: {}", status, text.trim())));
        }
        Ok(text)
    }

    fn classify(&self, e: reqwest::Error) -> RopeeErr {
        if e.is_timeout() {
            RopeeErr::TimeoutErr(self.timeout)
        } else {
            RopeeErr::BackendErr(e.to_string())
        }
    }
}

impl Backend for HecBackend {
    fn write(&self, batch: &WriteBatch) -> Result<()> {
        let body = self.events(batch)?;
        if body.is_empty() {
            return Ok(());
        }
        let request = self
            .client
            .post(self.hec_endpoint.clone())
            .header(AUTHORIZATION, format!("Splunk {}", self.hec_token))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request)?;
        Ok(())
    }

    fn read(&self, query: &ReadQuery) -> Result<ReadResult> {
        let mut results = Vec::with_capacity(query.queries.len());
        for q in query.queries.iter() {
            results.push(self.read_one(q)?);
        }
        Ok(ReadResult::new(results))
    }
}

#[derive(Default)]
pub struct HecBackendBuilder {}

impl HecBackendBuilder {
    pub fn new() -> HecBackendBuilder {
        HecBackendBuilder {}
    }
}

impl BackendBuilder for HecBackendBuilder {
    fn build(&self, opts: &ClientOpts) -> Result<Box<dyn Backend>> {
        Ok(Box::new(HecBackend::new(opts)?))
    }
}

/// One line of the search export stream. Lines without `result` are
/// progress or messages.
#[derive(Deserialize)]
struct ExportRow {
    #[serde(default)]
    result: Option<Map<String, JsonValue>>,
}

fn parse_export(text: &str, query: &Query) -> Result<QueryResult> {
    let mut grouped: BTreeMap<Labels, Vec<TimePoint>> = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row: ExportRow = serde_json::from_str(line)?;
        let (labels, point) = match row.result.as_ref().and_then(row_to_point) {
            Some(p) => p,
            None => continue,
        };
        if query.contains(point.timestamp) {
            grouped.entry(labels).or_insert_with(Vec::new).push(point);
        }
    }

    let matchers = query
        .matchers
        .iter()
        .map(LabelMatcher::compile)
        .collect::<Result<Vec<_>>>()?;
    let mut series = Vec::with_capacity(grouped.len());
    'series: for (labels, points) in grouped {
        for m in matchers.iter() {
            if !m.matches(labels.get(m.name()).unwrap_or("")) {
                continue 'series;
            }
        }
        let mut s = TimeSeries::from_data(labels, points);
        s.sort_time_points();
        series.push(s);
    }
    Ok(QueryResult::new(series))
}

fn row_to_point(row: &Map<String, JsonValue>) -> Option<(Labels, TimePoint)> {
    let value = json_f64(row.get(VALUE_FIELD)?)?;
    let timestamp = json_f64(row.get(TIMESTAMP_FIELD)?)?.round() as Timestamp;
    let mut labels = Labels::new();
    for (k, v) in row.iter() {
        if k.starts_with('_') || RESERVED_FIELDS.contains(&k.as_str()) {
            continue;
        }
        let v = match v {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            _ => continue,
        };
        if k == METRIC_NAME_FIELD {
            labels.add(Label::new(METRIC_NAME_LABEL.to_string(), v));
        } else {
            labels.add(Label::new(k.clone(), v));
        }
    }
    labels.get(METRIC_NAME_LABEL)?;
    labels.sort();
    Some((labels, TimePoint::new(timestamp, value)))
}

fn json_f64(v: &JsonValue) -> Option<f64> {
    match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn join_base_url(raw: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| RopeeErr::ConstructionErr(format!("invalid url {:?}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(RopeeErr::ConstructionErr(format!("invalid url {:?}", raw)));
    }
    if !url.path().ends_with('/') {
        let with_slash = format!("{}/", url.path());
        url.set_path(&with_slash);
    }
    url.join(path)
        .map_err(|e| RopeeErr::ConstructionErr(format!("invalid url {:?}: {}", raw, e)))
}

fn field_name(label: &str) -> &str {
    if label == METRIC_NAME_LABEL {
        METRIC_NAME_FIELD
    } else {
        label
    }
}

fn quote(v: &str) -> String {
    format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
}

fn epoch_secs(ms: Timestamp) -> String {
    format!("{:.3}", ms as f64 / 1000.0)
}
