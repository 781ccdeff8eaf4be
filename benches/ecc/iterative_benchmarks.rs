use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iterparity::ecc::iterative::channel::{inject_errors, random_word};
use iterparity::ecc::iterative::IterativeCode;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterative_encode");
    for &(rows, cols) in &[(4, 5), (16, 16), (64, 64)] {
        let code = IterativeCode::new(rows * cols, rows, cols, 4).unwrap();
        let word = random_word(rows * cols, &mut ChaCha20Rng::seed_from_u64(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &word,
            |b, word| b.iter(|| code.encode(black_box(word)).unwrap()),
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterative_decode");
    for &(rows, cols) in &[(4, 5), (16, 16), (64, 64)] {
        let code = IterativeCode::new(rows * cols, rows, cols, 4).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let word = random_word(rows * cols, &mut rng);
        let frame = code.encode(&word).unwrap();
        let (corrupted, _) = inject_errors(&frame, 1, &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &corrupted,
            |b, frame| b.iter(|| code.decode(black_box(frame)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
