use crate::backend::{Backend, BackendBuilder, ClientOpts, Credentials};
use crate::common::query::{QueryResult, ReadQuery, ReadResult};
use crate::common::time_series::{TimeSeries, WriteBatch};
use crate::{Result, RopeeErr};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// What a `RecordingBuilder` and its backends saw.
#[derive(Default, Debug)]
pub struct Recorded {
    pub built_with: Vec<Credentials>,
    pub writes: Vec<WriteBatch>,
    pub reads: Vec<ReadQuery>,
}

/// Backend double. Records every call, optionally fails or stalls.
#[derive(Clone, Default)]
pub struct RecordingBuilder {
    recorded: Arc<Mutex<Recorded>>,
    fail_build: Option<String>,
    fail_call: Option<String>,
    delay: Option<Duration>,
    read_series: Vec<TimeSeries>,
}

impl RecordingBuilder {
    pub fn new() -> RecordingBuilder {
        RecordingBuilder::default()
    }

    /// Every `build` fails with this message.
    pub fn failing_build(mut self, msg: &str) -> RecordingBuilder {
        self.fail_build = Some(msg.to_string());
        self
    }

    /// Every read and write fails with this message.
    pub fn failing_call(mut self, msg: &str) -> RecordingBuilder {
        self.fail_call = Some(msg.to_string());
        self
    }

    /// Every read and write sleeps this long first.
    pub fn delayed(mut self, delay: Duration) -> RecordingBuilder {
        self.delay = Some(delay);
        self
    }

    /// Series returned for each query of a read.
    pub fn with_series(mut self, series: Vec<TimeSeries>) -> RecordingBuilder {
        self.read_series = series;
        self
    }

    pub fn recorded(&self) -> Arc<Mutex<Recorded>> {
        self.recorded.clone()
    }

    pub fn build_count(&self) -> usize {
        self.recorded.lock().unwrap().built_with.len()
    }

    pub fn call_count(&self) -> usize {
        let recorded = self.recorded.lock().unwrap();
        recorded.writes.len() + recorded.reads.len()
    }
}

impl BackendBuilder for RecordingBuilder {
    fn build(&self, opts: &ClientOpts) -> Result<Box<dyn Backend>> {
        self.recorded
            .lock()
            .unwrap()
            .built_with
            .push(opts.credentials.clone());
        if let Some(msg) = &self.fail_build {
            return Err(RopeeErr::ConstructionErr(msg.clone()));
        }
        Ok(Box::new(RecordingBackend {
            recorded: self.recorded.clone(),
            fail_call: self.fail_call.clone(),
            delay: self.delay,
            read_series: self.read_series.clone(),
        }))
    }
}

pub struct RecordingBackend {
    recorded: Arc<Mutex<Recorded>>,
    fail_call: Option<String>,
    delay: Option<Duration>,
    read_series: Vec<TimeSeries>,
}

impl RecordingBackend {
    fn outcome(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        match &self.fail_call {
            Some(msg) => Err(RopeeErr::BackendErr(msg.clone())),
            None => Ok(()),
        }
    }
}

impl Backend for RecordingBackend {
    fn write(&self, batch: &WriteBatch) -> Result<()> {
        self.recorded.lock().unwrap().writes.push(batch.clone());
        self.outcome()
    }

    fn read(&self, query: &ReadQuery) -> Result<ReadResult> {
        self.recorded.lock().unwrap().reads.push(query.clone());
        self.outcome()?;
        Ok(ReadResult::new(
            query
                .queries
                .iter()
                .map(|_| QueryResult::new(self.read_series.clone()))
                .collect(),
        ))
    }
}
