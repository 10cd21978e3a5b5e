//! 网格操作性能基准测试

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quicktab::services::{Grid, LinkSettings, LinkStore, Position, default_grid, relocate};
use quicktab::storage::{Icon, Link, MemoryStore, RawLink};

fn grid_of(rows: usize, per_row: usize) -> Grid {
    Grid::from_rows(
        (0..rows)
            .map(|r| {
                (0..per_row)
                    .map(|l| {
                        Link::new(
                            format!("link-{}-{}", r, l),
                            format!("https://example.com/{}/{}", r, l),
                            Icon::Automatic,
                        )
                    })
                    .collect()
            })
            .collect(),
    )
}

// ============== relocate 基准测试 ==============

fn bench_relocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/relocate");

    for rows in [4, 32, 256] {
        let grid = grid_of(rows, 4);
        let last = Position::new(rows - 1, 3);

        group.bench_with_input(BenchmarkId::new("first_to_last", rows), &grid, |b, grid| {
            b.iter(|| relocate(grid, Position::new(0, 0), last, true).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("within_row", rows), &grid, |b, grid| {
            b.iter(|| relocate(grid, Position::new(0, 0), Position::new(0, 3), true).unwrap());
        });
    }

    let single = grid_of(8, 1);
    group.bench_function("collapse_row", |b| {
        b.iter(|| relocate(&single, Position::new(0, 0), Position::new(7, 0), false).unwrap());
    });

    group.finish();
}

// ============== 序列化基准测试 ==============

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/serde");
    let grid = default_grid();
    let json = serde_json::to_string(&grid).unwrap();

    group.bench_function("serialize_default", |b| {
        b.iter(|| serde_json::to_string(&grid).unwrap());
    });

    group.bench_function("deserialize_default", |b| {
        b.iter(|| serde_json::from_str::<Grid>(&json).unwrap());
    });

    group.finish();
}

// ============== LinkStore 基准测试 ==============

fn bench_store_add(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store/add_link_memory", |b| {
        b.to_async(&rt).iter(|| async {
            let mut store = LinkStore::load(
                Arc::new(MemoryStore::new()),
                LinkSettings {
                    seed_defaults: false,
                    ..LinkSettings::default()
                },
            )
            .await;
            store
                .add_link(RawLink {
                    name: "Bench".into(),
                    url: "https://bench.example.com".into(),
                    kind: "Automatic".into(),
                    icon_ref: None,
                    color: None,
                })
                .await
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_relocate, bench_serialize, bench_store_add);
criterion_main!(benches);
