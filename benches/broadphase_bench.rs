use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigid2d::{Shape, Vec2, World};

/// Lays bodies out on a jittered lattice so neighbours overlap and the broad
/// phase has real pairs to find.
fn populate_world(world: &mut World, num_bodies: usize) {
    let radius = 0.6;
    let spacing = 1.0; // less than 2 * radius, so neighbours overlap
    let columns = (num_bodies as f64).sqrt().ceil() as usize;

    for i in 0..num_bodies {
        let col = i % columns;
        let row = i / columns;
        let position = Vec2::new(col as f64 * spacing, row as f64 * spacing);
        let shape = Shape::circle(radius, 1.0).expect("valid circle");
        let index = world.add_body(shape, position);
        world.bodies[index].velocity = Vec2::new(
            ((i % 7) as f64 - 3.0) * 0.1,
            ((i % 5) as f64 - 2.0) * 0.1,
        );
    }
}

// Full tick: integrate, rebuild the grid, enumerate candidate pairs.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let dt = 1.0 / 60.0;

    for num_bodies in [100_usize, 1000, 5000] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_bodies),
            &num_bodies,
            |b, &n| {
                let mut world = World::new(2.0);
                populate_world(&mut world, n);
                b.iter(|| {
                    let pairs = world.step(black_box(dt));
                    black_box(pairs.len())
                });
            },
        );
    }
    group.finish();
}

// Range queries against a populated index.
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for num_bodies in [100_usize, 1000] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_bodies),
            &num_bodies,
            |b, &n| {
                let mut world = World::new(2.0);
                populate_world(&mut world, n);
                world.step(0.0); // build the index
                let region = rigid2d::Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
                b.iter(|| black_box(world.grid().query(black_box(&region))).len());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_query);
criterion_main!(benches);
