//! Performance benchmarks for directory operations.
//!
//! These benchmarks measure:
//! - Contact construction (field validation)
//! - Add/delete cycles at different directory sizes
//! - Snapshot creation cost as the directory grows

use contact_directory::{Contact, ContactDirectory};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn contact(i: usize) -> Contact {
    Contact::new(format!("c{}", i), "Alice", "Smith", "1234567890", "1 Road")
        .expect("benchmark contact should be valid")
}

fn directory_with(size: usize) -> ContactDirectory {
    let mut directory = ContactDirectory::with_capacity(size);
    for i in 0..size {
        directory
            .add(contact(i))
            .expect("benchmark IDs are unique");
    }
    directory
}

/// Benchmark building a contact, which validates all five fields.
fn bench_contact_new(c: &mut Criterion) {
    c.bench_function("contact_new", |b| {
        b.iter(|| {
            Contact::new(
                black_box("c1"),
                black_box("Alice"),
                black_box("Smith"),
                black_box("1234567890"),
                black_box("1 Road"),
            )
        })
    });
}

/// Benchmark an add followed by a delete at several directory sizes.
fn bench_add_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_delete");

    for size in [10, 1_000, 100_000] {
        let mut directory = directory_with(size);
        let extra = contact(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                directory.add(extra.clone()).expect("ID is free");
                directory.delete(extra.id()).expect("ID was just added")
            })
        });
    }

    group.finish();
}

/// Benchmark a phone update, including validation.
fn bench_update_phone(c: &mut Criterion) {
    let mut directory = directory_with(1_000);

    c.bench_function("update_phone", |b| {
        b.iter(|| directory.update_phone(black_box("c500"), black_box("2223334444")))
    });
}

/// Benchmark snapshot creation at several directory sizes.
fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");

    for size in [10, 1_000, 10_000] {
        let directory = directory_with(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| directory.list_all())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_contact_new,
    bench_add_delete,
    bench_update_phone,
    bench_list_all
);
criterion_main!(benches);
