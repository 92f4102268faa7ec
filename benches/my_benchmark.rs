use carbon_choropleth::{
    normalize_county_name, render_choropleth, ConflictPolicy, EmissionsJoin, EmissionsRecord,
    NameMatcher,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use test_utils::{counties_from_names, emissions_json, topology_json};

const COUNTY_NAMES: &[&str] = &[
    "St. Louis County",
    "DeKalb County",
    "Ste. Genevieve County",
    "Orleans Parish",
    "Bethel Census Area",
    "North Slope Borough",
    "Carson City",
    "Adjuntas Municipio",
    "Anchorage Municipality",
    "Prince George's County",
];

fn benchmark_normalize_county_name(c: &mut Criterion) {
    c.bench_function("normalize_county_name", |b| {
        b.iter(|| {
            for name in COUNTY_NAMES {
                black_box(normalize_county_name(black_box(name)));
            }
        })
    });
}

fn benchmark_emissions_join(c: &mut Criterion) {
    let counties = counties_from_names(COUNTY_NAMES);
    let records: Vec<EmissionsRecord> = COUNTY_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| EmissionsRecord::new(name.to_uppercase(), Some(index as f64)))
        .collect();
    let matcher = NameMatcher::default();

    c.bench_function("emissions_join", |b| {
        b.iter(|| {
            let join = EmissionsJoin::build(black_box(&records), &matcher, ConflictPolicy::KeepFirst)
                .expect("Join failed");
            black_box(join.apply(&counties));
        })
    });
}

fn benchmark_render_choropleth(c: &mut Criterion) {
    let topology = topology_json(COUNTY_NAMES);
    let rows: Vec<(&str, serde_json::Value)> = COUNTY_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| (*name, json!(index * 1000)))
        .collect();
    let emissions = emissions_json(&rows);

    c.bench_function("render_choropleth", |b| {
        b.iter(|| {
            render_choropleth(black_box(&topology), black_box(&emissions))
                .expect("Render failed");
        })
    });
}

criterion_group!(
    benches,
    benchmark_normalize_county_name,
    benchmark_emissions_join,
    benchmark_render_choropleth
);
criterion_main!(benches);
