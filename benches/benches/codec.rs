//! Criterion benchmarks for the HVIF encoder and decoder across icons of
//! increasing complexity.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hvif_benches::{generate_icon, sizes};
use hvif_types::format::{decode_icon, encode_icon};
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_icon");

	for (label, (shapes, points)) in [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
	] {
		let icon = generate_icon(shapes, points);
		group.bench_with_input(BenchmarkId::from_parameter(label), &icon, |b, icon| {
			b.iter(|| encode_icon(black_box(icon)).expect("encode"));
		});
	}

	group.finish();
}

fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_icon");

	for (label, (shapes, points)) in [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
	] {
		let icon = generate_icon(shapes, points);
		let bytes = encode_icon(&icon).expect("encode");
		group.bench_with_input(BenchmarkId::from_parameter(label), &bytes, |b, bytes| {
			b.iter(|| decode_icon(black_box(bytes)).expect("decode"));
		});
	}

	group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
	let icon = generate_icon(sizes::MEDIUM.0, sizes::MEDIUM.1);

	c.bench_function("round_trip_medium", |b| {
		b.iter(|| {
			let bytes = encode_icon(black_box(&icon)).expect("encode");
			decode_icon(black_box(&bytes)).expect("decode")
		});
	});
}

criterion_group!(benches, bench_encode, bench_decode, bench_round_trip);
criterion_main!(benches);
