use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tunecredit_core::parser::CreditParser;

fn bench_credit_parse(c: &mut Criterion) {
    let parser = CreditParser::new().unwrap();

    let inputs = vec![
        "Lute & JID - Luther's Freestyle (feat. EarthGang) (Remix)",
        "Epic Tune (feat. Guest) (Live Version) (Official Video)",
        "Luther's Freestyle (SlowedxReverb)",
        "Collaboration (feat. Artist A & Artist B, Artist C)",
        "Artist One, Artist Two - Anthem (feat. Guest A & Guest B) (Live Version) [4K] | Official Video",
    ];

    c.bench_function("credit_parse_single", |b| {
        b.iter(|| parser.parse(black_box(inputs[1])));
    });

    c.bench_function("credit_parse_track_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse_track(black_box(input));
            }
        });
    });

    c.bench_function("credit_parse_noisy_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse_with_noise(black_box(input), true);
            }
        });
    });
}

criterion_group!(benches, bench_credit_parse);
criterion_main!(benches);
