use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use handfreq::cards::deck::Deck;
use handfreq::evaluation::classifier::Classifier;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn classify(c: &mut Criterion) {
    let deck = Deck::standard();
    let mut rng = SmallRng::seed_from_u64(0);
    let hands = (0..1024).map(|_| deck.deal(&mut rng)).collect::<Vec<_>>();
    c.bench_function("classify 1024 dealt hands", |b| {
        b.iter(|| {
            for hand in hands.iter().copied() {
                black_box(Classifier::from(hand).labels());
            }
        })
    });
}

criterion_group!(benches, classify);
criterion_main!(benches);
