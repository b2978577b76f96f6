use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lgram_connectors::{ConnectorDictBuilder, easy_match, easy_match_desc};

const NAMES: &[&str] = &[
	"Ss", "Sp", "S", "SIs", "SIp", "O*", "Ox", "Os", "hWd", "dWd", "MVp", "MVa", "MX*r", "Xabcdefghi",
];

fn bench_match(c: &mut Criterion) {
	let mut builder = ConnectorDictBuilder::with_expected_count(NAMES.len());
	for name in NAMES {
		builder.add(name).unwrap();
	}
	let dict = builder.finish().unwrap();
	let descs: Vec<_> = NAMES.iter().map(|n| dict.desc(n).unwrap()).collect();

	c.bench_function("easy_match", |b| {
		b.iter(|| {
			let mut hits = 0u32;
			for s in NAMES {
				for t in NAMES {
					hits += u32::from(easy_match(black_box(s), black_box(t)));
				}
			}
			hits
		})
	});

	c.bench_function("easy_match_desc", |b| {
		b.iter(|| {
			let mut hits = 0u32;
			for &s in &descs {
				for &t in &descs {
					hits += u32::from(easy_match_desc(black_box(s), black_box(t)));
				}
			}
			hits
		})
	});
}

criterion_group!(benches, bench_match);
criterion_main!(benches);
