use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nmea0183::sentences::{parse, Gga, Pashr, Rmc};

const PASHR: &'static str =
    "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*07";
const GGA: &'static str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const RMC: &'static str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

/// Benchmark individual sentence decoding
fn bench_sentences(c: &mut Criterion) {
    c.bench_function("pashr", |b| b.iter(|| Pashr::try_from(black_box(PASHR))));

    c.bench_function("gga", |b| b.iter(|| Gga::try_from(black_box(GGA))));

    c.bench_function("rmc", |b| b.iter(|| Rmc::try_from(black_box(RMC))));
}

/// Benchmark dispatching a mixed feed through the registry
fn bench_dispatch(c: &mut Criterion) {
    let feed = [PASHR, GGA, RMC];
    let bytes: usize = feed.iter().map(|line| line.len()).sum();

    let mut group = c.benchmark_group("feed");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("dispatch", |b| {
        b.iter(|| {
            let mut count = 0;
            for line in feed {
                if parse(black_box(line)).is_ok() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sentences, bench_dispatch);
criterion_main!(benches);
