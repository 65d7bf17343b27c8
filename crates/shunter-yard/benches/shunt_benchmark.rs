// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shunter_model::index::WagonIndex;
use shunter_model::locomotive::Locomotive;
use shunter_model::wagon::{Wagon, WagonId};
use shunter_yard::train::Train;
use shunter_yard::yard::Yard;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn build_train(size: usize) -> (Yard, Train) {
    let mut yard = Yard::with_capacity(size);
    let handles: Vec<WagonIndex> = (0..size)
        .map(|i| yard.register(Wagon::passenger(WagonId::new(i as u32), 20)))
        .collect();
    yard.couple_sequence(&handles).unwrap();

    let mut train = Train::new(Locomotive::new(1, size), "Rotterdam", "Utrecht");
    assert!(train.attach_to_rear(&mut yard, handles[0]));
    (yard, train)
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (mut yard, mut train) = build_train(size);
            b.iter(|| {
                train.reverse(&mut yard);
                black_box(train.first_wagon())
            });
        });
    }
    group.finish();
}

fn bench_split_and_reattach(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_and_reattach");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (mut yard, mut train) = build_train(size);
            let mut siding = Train::new(Locomotive::new(2, size), "Rotterdam", "Utrecht");
            b.iter(|| {
                // The tail half travels out and back, restoring the
                // starting composition for the next iteration.
                train.split_at_position(&mut yard, size / 2, &mut siding);
                siding.split_at_position(&mut yard, 1, &mut train);
                black_box(train.first_wagon())
            });
        });
    }
    group.finish();
}

fn bench_seat_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("seat_total");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (yard, train) = build_train(size);
            b.iter(|| black_box(train.total_number_of_seats(&yard)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reverse,
    bench_split_and_reattach,
    bench_seat_total
);
criterion_main!(benches);
