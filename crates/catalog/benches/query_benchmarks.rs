use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ecocart_catalog::{apply, FilterSpec, Product, SortKey};
use ecocart_core::{EcoRating, Price};

fn synthetic_catalog(len: usize) -> Vec<Product> {
    let categories = ["Clothing", "Kitchenware", "Personal Care", "Fitness"];
    let brands = ["EcoLife", "EarthWear", "TrendFast", "GreenSmile"];
    (0..len)
        .map(|i| Product {
            id: format!("p{i}").parse().unwrap(),
            name: format!("Product {i}"),
            description: "Synthetic benchmark product".to_string(),
            price: Price::from_cents((i as u64 * 137) % 10_000),
            image: String::new(),
            eco_rating: EcoRating::ALL[i % EcoRating::ALL.len()],
            category: categories[i % categories.len()].to_string(),
            brand: brands[i % brands.len()].to_string(),
            materials: vec!["Recycled".to_string()],
            alternatives: vec![],
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_apply");

    for len in [8usize, 128, 1024] {
        let catalog = synthetic_catalog(len);

        let mut filtered_sorted = FilterSpec::new();
        filtered_sorted.toggle_category("Clothing");
        filtered_sorted.toggle_rating(EcoRating::A);
        filtered_sorted.toggle_rating(EcoRating::B);
        filtered_sorted.sort = SortKey::PriceAsc;

        let mut rating_sorted = FilterSpec::new();
        rating_sorted.sort = SortKey::RatingDesc;

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("featured_unfiltered", len),
            &catalog,
            |b, catalog| b.iter(|| apply(black_box(catalog), black_box(&FilterSpec::new()))),
        );
        group.bench_with_input(
            BenchmarkId::new("category_rating_price_asc", len),
            &catalog,
            |b, catalog| b.iter(|| apply(black_box(catalog), black_box(&filtered_sorted))),
        );
        group.bench_with_input(
            BenchmarkId::new("rating_desc", len),
            &catalog,
            |b, catalog| b.iter(|| apply(black_box(catalog), black_box(&rating_sorted))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
