use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vi::methods::transform_buffer as vi_transform_buffer;
use vimark::{EngineConfig, InputMethod, InputSession, VietEngine};

fn type_seq(session: &mut InputSession, seq: &str) {
    session.clear();
    for c in seq.chars() {
        black_box(session.feed(c));
    }
}

fn type_seq_vi(def: &vi::Definition, out: &mut String, seq: &str) {
    out.clear();
    vi_transform_buffer(def, seq.chars(), out);
    black_box(&out);
}

fn session_for(method: InputMethod) -> InputSession {
    InputSession::with_config(EngineConfig {
        input_method: method,
        ..EngineConfig::default()
    })
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("methods");

    let cases: &[(&str, InputMethod, &str)] = &[
        ("telex", InputMethod::Telex, "Tooi ddang gox tieengs Vieejt "),
        ("vni", InputMethod::Vni, "To6i d9ang go4 tie61ng Vie65t "),
        ("viqr", InputMethod::Viqr, "To^i dda'ng go~ tie^'ng Vie^.t "),
        ("auto", InputMethod::Auto, "Tooi d9ang go~ tie61ng Vieejt "),
    ];

    for (name, method, seq) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(*name), seq, |b, input| {
            let mut s = session_for(*method);
            b.iter(|| type_seq(&mut s, input))
        });
    }

    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_key");

    let cases: &[(&str, char, &str)] = &[
        ("single", 's', "ba"),
        ("uo_pair", 'w', "truong"),
        ("shift", 'n', "tóa"),
        ("qu_stem", 'a', "qú"),
    ];

    for (name, key, word) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(*name), word, |b, word| {
            let mut e = VietEngine::new();
            let caret = word.chars().last().unwrap_or(' ');
            b.iter(|| black_box(e.process_key(*key, caret, word)))
        });
    }

    group.finish();
}

fn bench_compare_telex(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_telex");

    let cases: &[(&str, &str)] = &[
        ("simple", "phoos"),
        ("sentence", "Tooi ddang gox Tieengs Vieejt "),
        ("mixed", "clear free pro "),
        ("uow", "truwowngf"),
        ("cluster", "nghees"),
    ];

    for (name, seq) in cases {
        group.bench_with_input(BenchmarkId::new("vimark", *name), seq, |b, input| {
            let mut s = session_for(InputMethod::Telex);
            b.iter(|| type_seq(&mut s, input))
        });

        group.bench_with_input(BenchmarkId::new("vi", *name), seq, |b, input| {
            let mut out = String::new();
            b.iter(|| type_seq_vi(&vi::TELEX, &mut out, input))
        });
    }

    group.finish();
}

fn bench_compare_vni(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_vni");

    let cases: &[(&str, &str)] = &[
        ("simple", "pho61"),
        ("sentence", "To6i d9ang go4 Tie61ng Vie65t "),
        ("mixed", "clear free pro "),
        ("uow", "tru7o7ng2"),
        ("cluster", "nghe61"),
    ];

    for (name, seq) in cases {
        group.bench_with_input(BenchmarkId::new("vimark", *name), seq, |b, input| {
            let mut s = session_for(InputMethod::Vni);
            b.iter(|| type_seq(&mut s, input))
        });

        group.bench_with_input(BenchmarkId::new("vi", *name), seq, |b, input| {
            let mut out = String::new();
            b.iter(|| type_seq_vi(&vi::VNI, &mut out, input))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_methods,
    bench_placement,
    bench_compare_telex,
    bench_compare_vni
);
criterion_main!(benches);
