use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tienda_catalog::Product;
use tienda_i18n::TextBundle;
use tienda_render::{format_price, render_page, star_states};

fn sample_products(n: u64) -> Vec<Product> {
    (0..n)
        .map(|id| Product {
            id,
            title: format!("Product {id}"),
            description: "A product description of typical length for a card.".to_string(),
            rating: (id % 6) as f64,
            image: format!("/product-{id}.png"),
            price: Some(1000.0 + 999.0 * id as f64),
        })
        .collect()
}

fn bench_format_price(c: &mut Criterion) {
    c.bench_function("format_price/7_digits", |b| {
        b.iter(|| format_price(black_box(1234567.0)))
    });
}

fn bench_star_states(c: &mut Criterion) {
    c.bench_function("star_states/default", |b| {
        b.iter(|| star_states(black_box(3.0), black_box(5)))
    });
}

fn bench_render_page(c: &mut Criterion) {
    let texts = TextBundle::new("Featured products");
    for n in [10u64, 100, 1000] {
        let products = sample_products(n);
        c.bench_function(&format!("render_page/{n}_products"), |b| {
            b.iter(|| render_page(black_box(Some(&products)), black_box(&texts)))
        });
    }
}

criterion_group!(benches, bench_format_price, bench_star_states, bench_render_page);
criterion_main!(benches);
