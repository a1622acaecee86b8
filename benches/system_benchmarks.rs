use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hostpulse::{collect_snapshot, Snapshot, SnapshotStore, SystemCollector};
use serde_json;

fn sample_snapshot() -> Snapshot {
    Snapshot {
        timestamp: "2024-01-15 10:30:00.123Z".to_string(),
        cpu_percent: 12.5,
        memory_percent: 48.2,
        rx_rate: 1024,
        tx_rate: 512,
        rx_bytes: 104_857_600,
        tx_bytes: 52_428_800,
    }
}

/// Benchmark one full sampling cycle against the host
fn bench_snapshot_collection(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");
    let mut group = c.benchmark_group("collection");
    group.sample_size(10);

    group.bench_function("host_snapshot_collection", |b| {
        b.to_async(&rt).iter(|| async {
            let mut collector = SystemCollector::new();
            collect_snapshot(&mut collector).await.expect("Should collect snapshot")
        })
    });

    group.finish();
}

/// Benchmark JSON encoding of the response body
fn bench_json_serialization(c: &mut Criterion) {
    let snapshot = sample_snapshot();

    c.bench_function("json_serialization", |b| {
        b.iter(|| serde_json::to_vec(&snapshot).expect("Should serialize"))
    });
}

/// Benchmark store publish and read
fn bench_store_access(c: &mut Criterion) {
    let store = SnapshotStore::new();
    store.publish(sample_snapshot());

    c.bench_function("store_read", |b| b.iter(|| store.read()));
    c.bench_function("store_publish", |b| {
        b.iter(|| store.publish(sample_snapshot()))
    });
}

/// Benchmark reads from many tasks while a writer keeps publishing
fn bench_concurrent_reads(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");

    for readers in [1, 4, 16, 64].iter() {
        c.bench_with_input(
            BenchmarkId::new("concurrent_reads", readers),
            readers,
            |b, &readers| {
                b.to_async(&rt).iter(|| async move {
                    let store = SnapshotStore::new();
                    let writer = {
                        let store = store.clone();
                        tokio::spawn(async move {
                            for _ in 0..readers {
                                store.publish(sample_snapshot());
                                tokio::task::yield_now().await;
                            }
                        })
                    };

                    let handles: Vec<_> = (0..readers)
                        .map(|_| {
                            let store = store.clone();
                            tokio::spawn(async move { store.read() })
                        })
                        .collect();

                    futures_util::future::join_all(handles).await;
                    writer.await.expect("Writer should finish");
                })
            },
        );
    }
}

criterion_group!(
    benches,
    bench_snapshot_collection,
    bench_json_serialization,
    bench_store_access,
    bench_concurrent_reads
);
criterion_main!(benches);
