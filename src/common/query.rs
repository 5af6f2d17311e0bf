use crate::common::time_point::Timestamp;
use crate::common::time_series::TimeSeries;
use crate::proto::LabelMatcher_Type;
use crate::{Result, RopeeErr};
use protobuf::RepeatedField;
use regex::Regex;
use std::convert::TryFrom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchType {
    Equal,
    NotEqual,
    RegexMatch,
    RegexNoMatch,
}

impl From<LabelMatcher_Type> for MatchType {
    fn from(t: LabelMatcher_Type) -> Self {
        match t {
            LabelMatcher_Type::EQ => MatchType::Equal,
            LabelMatcher_Type::NEQ => MatchType::NotEqual,
            LabelMatcher_Type::RE => MatchType::RegexMatch,
            LabelMatcher_Type::NRE => MatchType::RegexNoMatch,
        }
    }
}

impl From<MatchType> for LabelMatcher_Type {
    fn from(t: MatchType) -> Self {
        match t {
            MatchType::Equal => LabelMatcher_Type::EQ,
            MatchType::NotEqual => LabelMatcher_Type::NEQ,
            MatchType::RegexMatch => LabelMatcher_Type::RE,
            MatchType::RegexNoMatch => LabelMatcher_Type::NRE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelMatcher {
    pub match_type: MatchType,
    pub name: String,
    pub value: String,
}

impl LabelMatcher {
    pub fn new(match_type: MatchType, name: &str, value: &str) -> LabelMatcher {
        LabelMatcher {
            match_type,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_regex(&self) -> bool {
        self.match_type == MatchType::RegexMatch || self.match_type == MatchType::RegexNoMatch
    }

    /// Check a label value, a missing label being the empty string.
    /// Regex matchers are anchored on both ends like prometheus does.
    pub fn matches(&self, value: &str) -> Result<bool> {
        Ok(self.compile()?.matches(value))
    }

    /// Build the regex once, for checking many label sets.
    pub fn compile(&self) -> Result<CompiledMatcher<'_>> {
        let test = match self.match_type {
            MatchType::Equal => ValueTest::Equal(&self.value),
            MatchType::NotEqual => ValueTest::NotEqual(&self.value),
            MatchType::RegexMatch => ValueTest::Regex(self.anchored()?),
            MatchType::RegexNoMatch => ValueTest::NotRegex(self.anchored()?),
        };
        Ok(CompiledMatcher {
            name: &self.name,
            test,
        })
    }

    fn anchored(&self) -> Result<Regex> {
        Ok(Regex::new(&format!("^(?:{})$", self.value))?)
    }
}

enum ValueTest<'a> {
    Equal(&'a str),
    NotEqual(&'a str),
    Regex(Regex),
    NotRegex(Regex),
}

pub struct CompiledMatcher<'a> {
    name: &'a str,
    test: ValueTest<'a>,
}

impl<'a> CompiledMatcher<'a> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn matches(&self, value: &str) -> bool {
        match &self.test {
            ValueTest::Equal(v) => value == *v,
            ValueTest::NotEqual(v) => value != *v,
            ValueTest::Regex(r) => r.is_match(value),
            ValueTest::NotRegex(r) => !r.is_match(value),
        }
    }
}

impl From<&LabelMatcher> for crate::proto::LabelMatcher {
    fn from(m: &LabelMatcher) -> Self {
        crate::proto::LabelMatcher {
            field_type: m.match_type.into(),
            name: m.name.clone(),
            value: m.value.clone(),
            ..Default::default()
        }
    }
}

impl From<&crate::proto::LabelMatcher> for LabelMatcher {
    fn from(m: &crate::proto::LabelMatcher) -> Self {
        LabelMatcher {
            match_type: m.field_type.into(),
            name: m.name.clone(),
            value: m.value.clone(),
        }
    }
}

/// One query over `[start, end]` inclusive in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub start: Timestamp,
    pub end: Timestamp,
    pub matchers: Vec<LabelMatcher>,
}

impl Query {
    pub fn new(start: Timestamp, end: Timestamp, matchers: Vec<LabelMatcher>) -> Query {
        Query {
            start,
            end,
            matchers,
        }
    }

    pub fn contains(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

impl From<&Query> for crate::proto::Query {
    fn from(q: &Query) -> Self {
        crate::proto::Query {
            start_timestamp_ms: q.start,
            end_timestamp_ms: q.end,
            matchers: RepeatedField::from_vec(
                q.matchers.iter().map(crate::proto::LabelMatcher::from).collect(),
            ),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::proto::Query> for Query {
    type Error = RopeeErr;

    fn try_from(q: &crate::proto::Query) -> Result<Self> {
        if q.start_timestamp_ms > q.end_timestamp_ms {
            return Err(RopeeErr::ProtocolErr(format!(
                "query start {} is after end {}",
                q.start_timestamp_ms, q.end_timestamp_ms
            )));
        }
        Ok(Query {
            start: q.start_timestamp_ms,
            end: q.end_timestamp_ms,
            matchers: q.matchers.iter().map(LabelMatcher::from).collect(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadQuery {
    pub queries: Vec<Query>,
}

impl ReadQuery {
    pub fn new(queries: Vec<Query>) -> ReadQuery {
        ReadQuery { queries }
    }
}

impl From<&ReadQuery> for crate::proto::ReadRequest {
    fn from(r: &ReadQuery) -> Self {
        crate::proto::ReadRequest {
            queries: RepeatedField::from_vec(r.queries.iter().map(crate::proto::Query::from).collect()),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::proto::ReadRequest> for ReadQuery {
    type Error = RopeeErr;

    fn try_from(r: &crate::proto::ReadRequest) -> Result<Self> {
        Ok(ReadQuery {
            queries: r
                .queries
                .iter()
                .map(Query::try_from)
                .collect::<Result<Vec<Query>>>()?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    pub series: Vec<TimeSeries>,
}

impl QueryResult {
    pub fn new(series: Vec<TimeSeries>) -> QueryResult {
        QueryResult { series }
    }
}

/// Results positionally matching the queries of a `ReadQuery`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadResult {
    pub results: Vec<QueryResult>,
}

impl ReadResult {
    pub fn new(results: Vec<QueryResult>) -> ReadResult {
        ReadResult { results }
    }
}

impl From<&ReadResult> for crate::proto::ReadResponse {
    fn from(r: &ReadResult) -> Self {
        crate::proto::ReadResponse {
            results: RepeatedField::from_vec(
                r.results
                    .iter()
                    .map(|res| crate::proto::QueryResult {
                        timeseries: RepeatedField::from_vec(
                            res.series.iter().map(crate::proto::TimeSeries::from).collect(),
                        ),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::proto::ReadResponse> for ReadResult {
    type Error = RopeeErr;

    fn try_from(r: &crate::proto::ReadResponse) -> Result<Self> {
        let mut results = Vec::with_capacity(r.results.len());
        for res in r.results.iter() {
            results.push(QueryResult {
                series: res
                    .timeseries
                    .iter()
                    .map(TimeSeries::try_from)
                    .collect::<Result<Vec<TimeSeries>>>()?,
            });
        }
        Ok(ReadResult { results })
    }
}

#[cfg(test)]
mod test {
    use crate::common::query::{LabelMatcher, MatchType, Query, ReadQuery};
    use crate::{Result, RopeeErr};
    use std::convert::TryFrom;

    #[test]
    fn test_matchers() -> Result<()> {
        assert!(LabelMatcher::new(MatchType::Equal, "job", "node").matches("node")?);
        assert!(LabelMatcher::new(MatchType::NotEqual, "job", "node").matches("")?);
        assert!(LabelMatcher::new(MatchType::RegexMatch, "job", "no.*").matches("node")?);
        // anchored, a partial match is not a match
        assert!(!LabelMatcher::new(MatchType::RegexMatch, "job", "od").matches("node")?);
        assert!(LabelMatcher::new(MatchType::RegexNoMatch, "job", "od").matches("node")?);
        Ok(())
    }

    #[test]
    fn test_invalid_regex() {
        let matcher = LabelMatcher::new(MatchType::RegexMatch, "job", "(");
        assert!(matcher.matches("x").is_err());
        assert!(matcher.compile().is_err());
    }

    #[test]
    fn test_compiled_matcher_reuse() -> Result<()> {
        let matcher = LabelMatcher::new(MatchType::RegexNoMatch, "instance", "host-[0-9]+");
        let compiled = matcher.compile()?;
        assert_eq!(compiled.name(), "instance");
        assert!(!compiled.matches("host-1"));
        assert!(!compiled.matches("host-42"));
        assert!(compiled.matches("host-1:9100"));
        assert!(compiled.matches(""));
        Ok(())
    }

    #[test]
    fn test_reject_inverted_range() {
        let query = ReadQuery::new(vec![Query::new(2000, 1000, vec![])]);
        let proto = crate::proto::ReadRequest::from(&query);
        match ReadQuery::try_from(&proto) {
            Err(RopeeErr::ProtocolErr(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_range_inclusive() {
        let query = Query::new(0, 2000, vec![]);
        assert!(query.contains(0));
        assert!(query.contains(2000));
        assert!(!query.contains(2001));
    }
}
