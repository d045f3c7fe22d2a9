use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use eclipt::{
    cart_to_polar, cart_to_polar_with_speed, equ_to_ecl, equ_to_ecl_experimental, CartesianState,
    TimeOffset,
};

/// Uniform random vector with components in [-scale, scale]
#[inline]
fn rand_vector(rng: &mut StdRng, scale: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
    )
}

fn make_states(rng: &mut StdRng, samples: usize) -> Vec<(CartesianState, TimeOffset)> {
    (0..samples)
        .map(|_| {
            let state = CartesianState::new(rand_vector(rng, 5.0), rand_vector(rng, 0.05));
            let t = TimeOffset::from_seconds(rng.random_range(-3.0e9..3.0e9));
            (state, t)
        })
        .collect()
}

fn bench_equ_to_ecl(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("equ_to_ecl/iau2006", |b| {
        b.iter_batched(
            || make_states(&mut rng, samples),
            |cases| {
                for (state, t) in cases {
                    black_box(equ_to_ecl(black_box(&state), black_box(t)).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("equ_to_ecl/linear", |b| {
        b.iter_batched(
            || make_states(&mut rng, samples),
            |cases| {
                for (state, t) in cases {
                    black_box(equ_to_ecl_experimental(black_box(&state), black_box(t)).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_cart_to_polar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("cart_to_polar/position", |b| {
        b.iter_batched(
            || make_states(&mut rng, samples),
            |cases| {
                for (state, _) in cases {
                    black_box(cart_to_polar(black_box(&state.position)));
                }
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("cart_to_polar/with_speed", |b| {
        b.iter_batched(
            || make_states(&mut rng, samples),
            |cases| {
                for (state, _) in cases {
                    black_box(cart_to_polar_with_speed(black_box(&state)).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_equ_to_ecl, bench_cart_to_polar
);
criterion_main!(benches);
