//! Benchmarks for cable network resolution and distribution.
//!
//! Measures performance of:
//! - Cold flood-fill network resolution
//! - Cached membership lookup
//! - A full round-robin distribution pass

use std::cell::Cell;
use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use fluxmesh_lattice::{Direction, PortMask, Pos};
use fluxmesh_net::{EnergySink, Host, Mesh};

struct BenchSink {
    stored: Cell<u64>,
}

impl EnergySink for BenchSink {
    fn receive(&self, amount: u32, simulate: bool) -> u32 {
        let taken = amount.min(10);
        if !simulate {
            self.stored.set(self.stored.get() + u64::from(taken));
        }
        taken
    }
}

struct BenchHost {
    tick: Cell<u64>,
    sinks: HashMap<Pos, BenchSink>,
}

impl BenchHost {
    fn above_line(length: i32) -> Self {
        let sinks = (0..length)
            .map(|x| (Pos::new(x, 1, 0), BenchSink { stored: Cell::new(0) }))
            .collect();
        Self {
            tick: Cell::new(0),
            sinks,
        }
    }
}

impl Host for BenchHost {
    fn is_authoritative(&self) -> bool {
        true
    }
    fn current_tick(&self) -> u64 {
        self.tick.get()
    }
    fn is_active(&self, _pos: Pos) -> bool {
        true
    }
    fn redstone_enabled(&self, _pos: Pos) -> bool {
        true
    }
    fn can_receive(&self, _pos: Pos, _side: Direction) -> bool {
        true
    }
    fn can_extract(&self, _pos: Pos, _side: Direction) -> bool {
        true
    }
    fn max_extract(&self, _pos: Pos) -> u64 {
        u64::MAX
    }
    fn sink_at(&self, pos: Pos, _face: Direction) -> Option<&dyn EnergySink> {
        self.sinks.get(&pos).map(|sink| sink as &dyn EnergySink)
    }
}

fn line_mesh(length: i32) -> Mesh {
    let mut mesh = Mesh::new();
    for x in 0..length {
        mesh.insert(Pos::new(x, 0, 0), PortMask::ALL).unwrap();
    }
    mesh
}

/// Benchmark flood-fill resolution of an unresolved line network
fn bench_cold_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_resolve");

    for &length in &[10i32, 100, 1000] {
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &n| {
            b.iter_batched(
                || line_mesh(n),
                |mesh| mesh.resolve(black_box(Pos::ORIGIN)).unwrap().len(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// Benchmark cached membership lookup
fn bench_cached_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_resolve");

    for &length in &[10i32, 100, 1000] {
        let mesh = line_mesh(length);
        mesh.resolve(Pos::ORIGIN).unwrap();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(length), &mesh, |b, mesh| {
            b.iter(|| mesh.resolve(black_box(Pos::ORIGIN)).unwrap().len())
        });
    }
    group.finish();
}

/// Benchmark a full distribution pass over a line of cables with sinks
fn bench_distribution_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution_pass");

    for &length in &[10i32, 100, 1000] {
        let mesh = line_mesh(length);
        let host = BenchHost::above_line(length);
        mesh.resolve(Pos::ORIGIN).unwrap();
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                mesh.receive_energy(
                    &host,
                    black_box(Pos::ORIGIN),
                    u64::from(u32::MAX),
                    false,
                    Some(Direction::Down),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cold_resolve,
    bench_cached_resolve,
    bench_distribution_pass,
);

criterion_main!(benches);
