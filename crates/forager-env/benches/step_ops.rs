//! Step-loop benchmarks: the per-tick cost of the full decision loop
//! (impulse, integration, shaping, contact drain, encoding).

use criterion::{criterion_group, criterion_main, Criterion};
use forager_core::{Action, ContactTag, Vec3};
use forager_env::{EnvConfig, ForagerEnv};
use forager_test_utils::{SharedAnchor, SharedBody};
use std::hint::black_box;

fn ready_env() -> ForagerEnv {
    let config = EnvConfig::default();
    let body = SharedBody::at(config.agent_spawn);
    let mut env = ForagerEnv::new(config, Box::new(body)).unwrap();
    env.attach_food(Box::new(SharedAnchor::at(Vec3::ZERO)));
    env.attach_poison(Box::new(SharedAnchor::at(Vec3::ZERO)));
    env.reset().unwrap();
    env
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_forward", |b| {
        let mut env = ready_env();
        b.iter(|| {
            if env.is_done() {
                env.reset().unwrap();
            }
            black_box(env.step(black_box(Action::Forward)).unwrap());
        });
    });

    c.bench_function("step_with_contact", |b| {
        let mut env = ready_env();
        b.iter(|| {
            if env.is_done() {
                env.reset().unwrap();
            }
            env.notify_contact(ContactTag::Food);
            black_box(env.step(black_box(Action::Stay)).unwrap());
        });
    });
}

fn bench_reset(c: &mut Criterion) {
    c.bench_function("reset", |b| {
        let mut env = ready_env();
        b.iter(|| {
            black_box(env.reset().unwrap());
        });
    });
}

criterion_group!(benches, bench_step, bench_reset);
criterion_main!(benches);
