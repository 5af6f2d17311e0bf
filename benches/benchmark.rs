use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ropee::codec::{decode, encode};
use ropee::{Label, Labels, LabelMatcher, MatchType, Query, QueryResult, ReadQuery, ReadResult, TimeSeries, WriteBatch};

fn generate_series(series: usize, samples: usize) -> Vec<TimeSeries> {
    (0..series)
        .map(|i| {
            let mut s = TimeSeries::new(Labels::from(vec![
                Label::from("__name__", "node_cpu_seconds_total"),
                Label::from("cpu", &i.to_string()),
                Label::from("instance", "10.0.0.1:9100"),
                Label::from("mode", "idle"),
            ]));
            for t in 0..samples {
                s.add(1_600_000_000_000 + (t as i64) * 15_000, (t * i) as f64 * 0.25);
            }
            s
        })
        .collect()
}

fn codec_criterion_benchmark(c: &mut Criterion) {
    let batch = WriteBatch::new(generate_series(100, 10));
    let batch_frame = encode(&batch).unwrap();
    c.bench_function("encode write batch", |b| b.iter(|| encode(black_box(&batch))));
    c.bench_function("decode write batch", |b| {
        b.iter(|| decode::<WriteBatch>(black_box(&batch_frame)))
    });

    let query = ReadQuery::new(vec![Query::new(
        0,
        3_600_000,
        vec![
            LabelMatcher::new(MatchType::Equal, "__name__", "node_cpu_seconds_total"),
            LabelMatcher::new(MatchType::RegexMatch, "mode", "idle|user"),
        ],
    )]);
    let query_frame = encode(&query).unwrap();
    c.bench_function("decode read query", |b| {
        b.iter(|| decode::<ReadQuery>(black_box(&query_frame)))
    });

    let result = ReadResult::new(vec![QueryResult::new(generate_series(100, 240))]);
    c.bench_function("encode read result", |b| b.iter(|| encode(black_box(&result))));
}

criterion_group!(benches, codec_criterion_benchmark);
criterion_main!(benches);
