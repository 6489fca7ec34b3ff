#![cfg(feature = "test-cases")]

use bencher::{benchmark_group, benchmark_main, Bencher};

use tp_segment::test_cases;
use tp_segment::{Markers, Segmenter, SymbolStream};

benchmark_group!(benches, learn, predict);
benchmark_main!(benches);

fn learn(bench: &mut Bencher) {
    let markers = Markers::default();
    let raw = test_cases::corpus(&markers);
    let stream = SymbolStream::parse(&raw, &markers);
    bench.iter(|| Segmenter::learn(&stream));
}

fn predict(bench: &mut Bencher) {
    let markers = Markers::default();
    let raw = test_cases::corpus(&markers);
    let stream = SymbolStream::parse(&raw, &markers);
    let segmenter = Segmenter::learn(&stream);
    bench.iter(|| segmenter.predict_stream(&stream, &markers).unwrap());
}
