criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        canonizing_river_hand,
        permuting_river_hand,
        exhausting_three_card_hands,
        tallying_three_card_classes,
        querying_warm_table,
}

fn canonizing_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("canonize a random Hand", |b| {
        let hand = Hand::random();
        b.iter(|| Isomorphism::from(hand))
    });
}

fn permuting_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("permute a random Hand", |b| {
        let hand = Hand::random();
        let permutation = Permutation::random();
        b.iter(|| permutation.image(&hand))
    });
}

fn exhausting_three_card_hands(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 3-card Hands", |b| {
        b.iter(|| HandIterator::from(3).count())
    });
}

fn tallying_three_card_classes(c: &mut criterion::Criterion) {
    c.bench_function("tally all 3-card Isomorphisms", |b| {
        b.iter(|| Permutations::tally(3))
    });
}

fn querying_warm_table(c: &mut criterion::Criterion) {
    let path = std::env::temp_dir().join("isoperm-bench.pgcopy");
    let permutations = SuitPermutations::from(Config { path, max: 2 });
    permutations.warm();
    c.bench_function("query a warm permutation table", |b| {
        let hand = Hand::try_from("Ah Kh").unwrap();
        b.iter(|| permutations.count(hand).unwrap())
    });
}

use isoperm::Arbitrary;
use isoperm::cards::Hand;
use isoperm::cards::HandIterator;
use isoperm::cards::Isomorphism;
use isoperm::cards::Permutation;
use isoperm::permutations::Config;
use isoperm::permutations::Permutations;
use isoperm::permutations::SuitPermutations;
