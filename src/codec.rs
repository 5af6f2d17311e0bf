//! Snappy framed protobuf, the body format of prometheus remote storage.
//!
//! Prometheus uses the snappy *block* format (no stream framing), so a frame
//! is the uncompressed length as a varint followed by the compressed
//! elements. A truncated frame never decompresses to the announced length and
//! is rejected as a framing error instead of yielding a shorter message.
use crate::common::query::{ReadQuery, ReadResult};
use crate::common::time_series::WriteBatch;
use crate::{Result, RopeeErr};
use protobuf::Message;
use std::convert::TryFrom;

pub const CONTENT_TYPE: &str = "application/x-protobuf";
pub const CONTENT_ENCODING: &str = "snappy";

/// A request or response body that travels on the wire.
pub trait WireMessage: Sized {
    type Proto: Message;

    fn to_proto(&self) -> Self::Proto;

    fn from_proto(proto: &Self::Proto) -> Result<Self>;
}

impl WireMessage for WriteBatch {
    type Proto = crate::proto::WriteRequest;

    fn to_proto(&self) -> Self::Proto {
        Self::Proto::from(self)
    }

    fn from_proto(proto: &Self::Proto) -> Result<Self> {
        WriteBatch::try_from(proto)
    }
}

impl WireMessage for ReadQuery {
    type Proto = crate::proto::ReadRequest;

    fn to_proto(&self) -> Self::Proto {
        Self::Proto::from(self)
    }

    fn from_proto(proto: &Self::Proto) -> Result<Self> {
        ReadQuery::try_from(proto)
    }
}

impl WireMessage for ReadResult {
    type Proto = crate::proto::ReadResponse;

    fn to_proto(&self) -> Self::Proto {
        Self::Proto::from(self)
    }

    fn from_proto(proto: &Self::Proto) -> Result<Self> {
        ReadResult::try_from(proto)
    }
}

/// Decompress and parse one message.
pub fn decode<M: WireMessage>(compressed: &[u8]) -> Result<M> {
    let raw = snap::raw::Decoder::new().decompress_vec(compressed)?;
    let proto = M::Proto::parse_from_bytes(&raw)
        .map_err(|e| RopeeErr::ProtocolErr(e.to_string()))?;
    M::from_proto(&proto)
}

/// Serialize then compress one message.
pub fn encode<M: WireMessage>(message: &M) -> Result<Vec<u8>> {
    let raw = message
        .to_proto()
        .write_to_bytes()
        .map_err(|e| RopeeErr::InternalErr(e.to_string()))?;
    snap::raw::Encoder::new()
        .compress_vec(&raw)
        .map_err(|e| RopeeErr::InternalErr(e.to_string()))
}

#[cfg(test)]
mod test {
    use crate::codec::{decode, encode};
    use crate::common::label::{Label, Labels};
    use crate::common::query::{LabelMatcher, MatchType, Query, QueryResult, ReadQuery, ReadResult};
    use crate::common::time_series::{TimeSeries, WriteBatch};
    use crate::{Result, RopeeErr};
    use protobuf::Message;

    fn series(name: &str, job: &str, points: &[(i64, f64)]) -> TimeSeries {
        let mut s = TimeSeries::new(Labels::from(vec![
            Label::from("__name__", name),
            Label::from("job", job),
        ]));
        for (t, v) in points {
            s.add(*t, *v);
        }
        s
    }

    fn write_batch() -> WriteBatch {
        WriteBatch::new(vec![
            series("up", "node", &[(1000, 1.0), (500, 0.0)]),
            series("http_requests_total", "api", &[(-1, 1e300), (0, -2.5)]),
        ])
    }

    fn read_query() -> ReadQuery {
        ReadQuery::new(vec![
            Query::new(
                0,
                2000,
                vec![
                    LabelMatcher::new(MatchType::Equal, "__name__", "up"),
                    LabelMatcher::new(MatchType::RegexNoMatch, "job", "test.*"),
                ],
            ),
            Query::new(5, 5, vec![]),
        ])
    }

    fn read_result() -> ReadResult {
        ReadResult::new(vec![
            QueryResult::new(vec![series("up", "node", &[(1000, 1.0)])]),
            QueryResult::default(),
        ])
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let batch = write_batch();
        assert_eq!(decode::<WriteBatch>(&encode(&batch)?)?, batch);
        let query = read_query();
        assert_eq!(decode::<ReadQuery>(&encode(&query)?)?, query);
        let result = read_result();
        assert_eq!(decode::<ReadResult>(&encode(&result)?)?, result);
        assert_eq!(decode::<WriteBatch>(&encode(&WriteBatch::default())?)?, WriteBatch::default());

        // prometheus staleness marker
        let stale = f64::from_bits(0x7ff0_0000_0000_0002);
        let batch = WriteBatch::new(vec![series("up", "node", &[(1000, stale), (2000, f64::NAN)])]);
        let back = decode::<WriteBatch>(&encode(&batch)?)?;
        assert_eq!(back, batch);
        assert_eq!(back.series[0].time_points()[0].value.to_bits(), 0x7ff0_0000_0000_0002);
        Ok(())
    }

    #[test]
    fn test_encode_deterministic() -> Result<()> {
        assert_eq!(encode(&write_batch())?, encode(&write_batch())?);
        Ok(())
    }

    #[test]
    fn test_reject_truncated() -> Result<()> {
        let frames = vec![encode(&write_batch())?, encode(&read_query())?, encode(&read_result())?];
        for frame in frames {
            for len in 1..frame.len() {
                match decode::<WriteBatch>(&frame[..len]) {
                    Err(RopeeErr::FramingErr(_)) | Err(RopeeErr::ProtocolErr(_)) => {}
                    other => panic!("prefix of {} bytes decoded to {:?}", len, other),
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_reject_empty_body() {
        match decode::<ReadQuery>(&[]) {
            Err(RopeeErr::FramingErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_reject_length_mismatch() {
        // announces 100 bytes, carries a single one byte literal
        match decode::<WriteBatch>(&[100, 0x00, b'a']) {
            Err(RopeeErr::FramingErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_proto_bytes() -> Result<()> {
        let raw = crate::proto::WriteRequest::from(&write_batch()).write_to_bytes()?;
        let frame = snap::raw::Encoder::new().compress_vec(&raw)?;
        assert_eq!(frame, encode(&write_batch())?);
        Ok(())
    }

    #[test]
    fn test_reject_garbage_message() -> Result<()> {
        // valid snappy, payload is a field with an invalid wire type
        let frame = snap::raw::Encoder::new().compress_vec(&[0x0f, 0xff, 0xff])?;
        match decode::<WriteBatch>(&frame) {
            Err(RopeeErr::ProtocolErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }
}
