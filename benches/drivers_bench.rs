//! Benchmarks dos Drivers Mentais e do Relatório.
//!
//! Testa performance de:
//! - Detecção de padrões e seleção de drivers
//! - Sistema completo de drivers (customização + blocos de apoio)
//! - Análise de fallback (templates)
//! - Relatório completo com colaboradores mock
//!
//! Executar: `cargo bench --bench drivers_bench`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deep_market::drivers::{identify_patterns, select_drivers, DriversArchitect};
use deep_market::llm::MockAnalysisGenerator;
use deep_market::prediction::MockFuturePredictor;
use deep_market::report::{MarketAnalysis, ReportAssembler, WebResearch};
use deep_market::search::MockSearchAggregator;
use deep_market::types::{BusinessProfile, SearchHit};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// HELPERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn create_profile(pains: usize) -> BusinessProfile {
    let mut profile = BusinessProfile::with_segment("consultoria");
    profile.price = Some("1997".into());
    profile.pains = (0..pains)
        .map(|i| format!("Dor {} sem crescimento no negócio", i))
        .collect();
    profile.desires = vec!["Ser reconhecido como autoridade".into()];
    profile.objections = vec![
        "Não tenho tempo".into(),
        "Está caro".into(),
        "Já tentei de tudo".into(),
    ];
    profile
}

fn create_hits(count: usize) -> Vec<SearchHit> {
    (0..count)
        .map(|i| {
            SearchHit::new(
                format!("Resultado {}", i),
                format!("https://site{}.com.br/artigo", i % 7),
                "Tendências do mercado de consultoria",
                "jina",
            )
        })
        .collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK: Padrões e Seleção
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_selection");

    for pains in [1, 10, 50] {
        let profile = create_profile(pains);

        group.bench_with_input(BenchmarkId::new("identify_patterns", pains), &profile, |bencher, p| {
            bencher.iter(|| black_box(identify_patterns(&p.pains, &p.desires, None)))
        });

        let patterns = identify_patterns(&profile.pains, &profile.desires, None);
        group.bench_with_input(BenchmarkId::new("select_drivers", pains), &profile, |bencher, p| {
            bencher.iter(|| black_box(select_drivers(&patterns, &p.objections)))
        });
    }

    group.finish();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK: Sistema Completo
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn bench_complete_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("drivers_system");
    let architect = DriversArchitect::new();
    let profile = create_profile(5);
    let empty = BusinessProfile::default();

    group.bench_function("complete_system", |bencher| {
        bencher.iter(|| black_box(architect.generate_complete_drivers_system(&profile, &profile)))
    });

    group.bench_function("empty_profile", |bencher| {
        bencher.iter(|| black_box(architect.generate_complete_drivers_system(&empty, &empty)))
    });

    group.finish();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK: Análise de Fallback
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn bench_fallback_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_analysis");
    let profile = create_profile(3);

    for hits in [0, 20, 100] {
        let research = WebResearch::from_hits(vec!["consultoria".into()], create_hits(hits));

        group.bench_with_input(BenchmarkId::new("templates", hits), &research, |bencher, r| {
            bencher.iter(|| black_box(MarketAnalysis::fallback(&profile, r)))
        });
    }

    let text = "Resposta livre da IA. ".repeat(500);
    let research = WebResearch::default();
    group.bench_function("text_path", |bencher| {
        bencher.iter(|| black_box(MarketAnalysis::from_text(&text, &profile, &research, 2000)))
    });

    group.finish();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK: Relatório Completo
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let assembler = ReportAssembler::new(
        Arc::new(MockSearchAggregator::with_hits(create_hits(10))),
        Arc::new(MockAnalysisGenerator::new()),
        Arc::new(MockFuturePredictor::new()),
    );
    let mut profile = create_profile(3);
    profile.query = Some("mercado de consultoria".into());

    group.bench_function("mock_collaborators", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(assembler.generate_report(&profile, None).await) })
    });

    group.bench_function("serialize_json", |bencher| {
        let report = runtime.block_on(assembler.generate_report(&profile, None));
        bencher.iter(|| black_box(report.to_json(false).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_selection,
    bench_complete_system,
    bench_fallback_analysis,
    bench_full_report,
);

criterion_main!(benches);
