//! Benchmarks for building packaging commands and collecting build output.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;

use objectwriter_core::config::PackagingConfig;
use objectwriter_core::packaging::shell_quote;
use objectwriter_core::CompileRequest;
use objectwriter_ui::components::CompileLog;

fn request(icon: bool, extra: bool) -> CompileRequest {
    CompileRequest {
        entry_path: PathBuf::from("/home/user/My Projects/tool/main.py"),
        icon_path: icon.then(|| PathBuf::from("/home/user/icons/app icon.ico")),
        output_dir: PathBuf::from("/home/user/dist"),
        extra_args: extra.then(|| "--noconsole --clean".to_string()),
    }
}

/// Benchmarks rendering the recommended command line.
fn bench_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommended_command");
    let config = PackagingConfig::default();

    for (name, icon, extra) in [
        ("plain", false, false),
        ("with_icon", true, false),
        ("with_icon_and_args", true, true),
    ] {
        let req = request(icon, extra);
        group.bench_with_input(BenchmarkId::new("command", name), &req, |b, req| {
            b.iter(|| black_box(req.command(black_box(&config))))
        });
    }

    group.finish();
}

/// Benchmarks quoting paths of different shapes.
fn bench_shell_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell_quote");

    let inputs = [
        ("bare", "/usr/local/bin/script.py".to_string()),
        ("spaces", "/home/user/My Documents/a script.py".to_string()),
        ("metacharacters", "/tmp/$HOME `x` \"y\" & z.py".to_string()),
        ("long", "segment with space/".repeat(64)),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(shell_quote(black_box(input))))
        });
    }

    group.finish();
}

/// Benchmarks appending build output the way a long build produces it.
fn bench_log_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_log");

    for lines in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("push", lines), lines, |b, &lines| {
            b.iter(|| {
                let mut log = CompileLog::new();
                for i in 0..lines {
                    log.push(format!("{} INFO: Building EXE from EXE-00.toc, step {}", i * 7, i));
                }
                black_box(log)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_command, bench_shell_quote, bench_log_push);
criterion_main!(benches);
