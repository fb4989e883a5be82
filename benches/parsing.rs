//! Criterion benchmarks for lndconnect parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lndconnect::{ConnectStringParser, ConnectionConfig, TlsContextError};

const CERT_B64URL: &str = include_str!("../tests/fixtures/tls_cert.b64url");

fn accept_any(_: &[u8]) -> Result<(), TlsContextError> {
    Ok(())
}

/// Benchmark: parsing with a stub TLS factory, isolating the parser itself
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = ConnectStringParser::with_tls_factory(accept_any);

    let cert = CERT_B64URL.trim();
    let with_cert =
        format!("lndconnect://node.example.com:10009?cert={cert}&macaroon=AgEDbG5kAvgBAwAQqrs");
    let test_cases = [
        ("minimal", "lndconnect://10.0.0.1:10009?macaroon=YWJjZA".to_string()),
        ("with_cert", with_cert),
        ("no_macaroon", "lndconnect://10.0.0.1:10009?cert=Zm9v".to_string()),
        ("wrong_scheme", "http://10.0.0.1:10009?macaroon=YWJjZA".to_string()),
    ];

    for (name, input) in &test_cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("input", name), input, |b, input| {
            b.iter(|| parser.parse(black_box(input.as_str())));
        });
    }

    group.finish();
}

/// Benchmark: parsing with the rustls factory, including trust store setup
fn bench_parse_rustls(c: &mut Criterion) {
    let parser = ConnectStringParser::new();
    let cert = CERT_B64URL.trim();
    let input =
        format!("lndconnect://node.example.com:10009?cert={cert}&macaroon=AgEDbG5kAvgBAwAQqrs");

    c.bench_function("parse_rustls", |b| {
        b.iter(|| parser.parse(black_box(input.as_str())));
    });
}

/// Benchmark: rendering a config back into a connect string
fn bench_to_connect_string(c: &mut Criterion) {
    let config = ConnectionConfig::new(
        "node.example.com",
        10009,
        Some(CERT_B64URL.trim().to_string()),
        "AgEDbG5kAvgBAwAQqrs",
    );

    c.bench_function("to_connect_string", |b| {
        b.iter(|| black_box(&config).to_connect_string());
    });
}

criterion_group!(benches, bench_parse, bench_parse_rustls, bench_to_connect_string);
criterion_main!(benches);
