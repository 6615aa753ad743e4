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

use abacus_sci::sci::SciCalc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_power(c: &mut Criterion) {
    let calc = SciCalc::new();
    let mut group = c.benchmark_group("power");
    for exponent in [0, 7, 15, 30] {
        group.bench_with_input(
            BenchmarkId::from_parameter(exponent),
            &exponent,
            |b, &exponent| b.iter(|| calc.power(black_box(2), black_box(exponent))),
        );
    }
    group.bench_function("unit_base_max_exponent", |b| {
        b.iter(|| calc.power(black_box(-1), black_box(i32::MAX)))
    });
    group.finish();
}

fn bench_factorial(c: &mut Criterion) {
    let calc = SciCalc::new();
    let mut group = c.benchmark_group("factorial");
    for n in [5, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| calc.factorial(black_box(n)))
        });
    }
    group.finish();
}

fn bench_average(c: &mut Criterion) {
    let calc = SciCalc::new();
    let mut group = c.benchmark_group("average");
    for len in [16usize, 1_024, 65_536] {
        let values: Vec<i32> = (0..len).map(|i| (i % 1_000) as i32 - 500).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| calc.average(black_box(Some(&values[..]))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_power, bench_factorial, bench_average);
criterion_main!(benches);
