use std::hint::black_box;
use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use msg_viewer::{ParseOptions, parse_file, parse_str};
use tempfile::NamedTempFile;

/// Generate synthetic .msg text with N message blocks
fn generate_msg_text(num_messages: usize) -> String {
    let mut text = String::new();

    for i in 0..num_messages {
        let nickname = if i % 3 == 0 { "alice.smith" } else { "bob_42" };
        text.push_str(&format!(
            "Time:2024-01-{:02}T{:02}:{:02}:00\nName:{}\nMessage:Test message {} with a smiley :) and some cafe\u{301}\n\n",
            (i % 28) + 1,
            (i / 60) % 24,
            i % 60,
            nickname,
            i
        ));
    }

    text
}

fn generate_msg_file(num_messages: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(generate_msg_text(num_messages).as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn bench_parse_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_file");
    let options = ParseOptions::default();

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_msg_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_file(black_box(file.path()), &options).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_long_content(c: &mut Criterion) {
    let options = ParseOptions::default();
    let content = "word :) ".repeat(120);
    let text = format!("Time:2024-01-01T12:00:00\nName:alice\nMessage:{}\n", content.trim_end());

    c.bench_function("parse_str_long_content", |b| {
        b.iter(|| parse_str(black_box(&text), &options).unwrap());
    });
}

criterion_group!(benches, bench_parse_file, bench_parse_long_content);
criterion_main!(benches);
