use crate::common::label::{Label, Labels};
use crate::common::time_point::{TimePoint, Timestamp, Value};
use crate::proto::Sample;
use crate::{Result, RopeeErr};
use protobuf::RepeatedField;
use std::convert::TryFrom;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    labels: Labels,
    time_points: Vec<TimePoint>,
}

impl TimeSeries {
    pub fn new(labels: Labels) -> Self {
        TimeSeries {
            labels,
            time_points: Vec::new(),
        }
    }

    pub fn from_data(labels: Labels, time_points: Vec<TimePoint>) -> Self {
        TimeSeries {
            labels,
            time_points,
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn add(&mut self, timestamp: Timestamp, value: Value) {
        self.time_points.push(TimePoint::new(timestamp, value))
    }

    pub fn time_points(&self) -> &Vec<TimePoint> {
        &self.time_points
    }

    pub fn sort_time_points(&mut self) {
        self.time_points.sort_by_key(|t| t.timestamp)
    }
}

impl From<&TimeSeries> for crate::proto::TimeSeries {
    fn from(t: &TimeSeries) -> Self {
        crate::proto::TimeSeries {
            labels: RepeatedField::from_vec(
                t.labels.vec().iter().map(crate::proto::Label::from).collect(),
            ),
            samples: RepeatedField::from_vec(t.time_points.iter().map(Sample::from).collect()),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::proto::TimeSeries> for TimeSeries {
    type Error = RopeeErr;

    fn try_from(t: &crate::proto::TimeSeries) -> Result<Self> {
        let labels = Labels::from_vec(t.labels.iter().map(Into::into).collect());
        if labels.has_duplicate_names() {
            return Err(RopeeErr::ProtocolErr(format!(
                "duplicate label name in series {:?}",
                labels
            )));
        }
        Ok(TimeSeries {
            labels,
            time_points: t.samples.iter().map(TimePoint::from).collect(),
        })
    }
}

/// Series of one remote write request, forwarded as a single unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteBatch {
    pub series: Vec<TimeSeries>,
}

impl WriteBatch {
    pub fn new(series: Vec<TimeSeries>) -> WriteBatch {
        WriteBatch { series }
    }

    pub fn sample_count(&self) -> usize {
        self.series.iter().map(|s| s.time_points().len()).sum()
    }
}

impl From<&WriteBatch> for crate::proto::WriteRequest {
    fn from(b: &WriteBatch) -> Self {
        crate::proto::WriteRequest {
            timeseries: RepeatedField::from_vec(
                b.series.iter().map(crate::proto::TimeSeries::from).collect(),
            ),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::proto::WriteRequest> for WriteBatch {
    type Error = RopeeErr;

    fn try_from(w: &crate::proto::WriteRequest) -> Result<Self> {
        Ok(WriteBatch {
            series: w
                .timeseries
                .iter()
                .map(TimeSeries::try_from)
                .collect::<Result<Vec<TimeSeries>>>()?,
        })
    }
}
