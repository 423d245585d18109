use criterion::{Criterion, black_box, criterion_group, criterion_main};
use launchdash::{
    Dataset, LaunchRecord, OutcomeClass, PayloadRange, SiteSelector,
    engine::{filter_scatter, success_pie},
};
use std::time::Duration;

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_sample_dataset(size: usize) -> Dataset {
    Dataset::new(
        (0..size)
            .map(|i| {
                let outcome = if i % 3 == 0 {
                    OutcomeClass::Failure
                } else {
                    OutcomeClass::Success
                };
                LaunchRecord::new(
                    SITES[i % SITES.len()],
                    (i * 37 % 10000) as f64,
                    outcome,
                    BOOSTERS[i % BOOSTERS.len()],
                )
                .with_flight_number(i as u32)
            })
            .collect(),
    )
}

fn bench_pie(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_pie");
    let dataset = create_sample_dataset(10_000);

    group.bench_function("all_sites", |b| {
        b.iter(|| black_box(success_pie(&dataset, &SiteSelector::All)));
    });

    let site = SiteSelector::from("KSC LC-39A");
    group.bench_function("single_site", |b| {
        b.iter(|| black_box(success_pie(&dataset, &site)));
    });

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_scatter");
    group.measurement_time(Duration::from_secs(5));
    let dataset = create_sample_dataset(10_000);
    let range = PayloadRange::new(2000., 6000.).unwrap();

    group.bench_function("all_sites", |b| {
        b.iter(|| black_box(filter_scatter(&dataset, &SiteSelector::All, &range)));
    });

    let site = SiteSelector::from("VAFB SLC-4E");
    group.bench_function("single_site", |b| {
        b.iter(|| black_box(filter_scatter(&dataset, &site, &range)));
    });

    group.bench_function("group_by_booster", |b| {
        let scatter = filter_scatter(&dataset, &SiteSelector::All, &range);
        b.iter(|| black_box(scatter.by_booster_category().len()));
    });

    group.finish();
}

criterion_group!(benches, bench_pie, bench_scatter);
criterion_main!(benches);
