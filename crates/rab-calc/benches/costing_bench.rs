//! 計算引擎基準測試

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rab_calc::{CostingCalculator, RabCalculator};
use rab_core::{AllocationPercentages, LineItem, RabOrder};
use rust_decimal::Decimal;

fn sample_item(seed: u32) -> LineItem {
    LineItem::new(format!("KEMEJA-{:03}", seed), 50 + seed % 200)
        .with_material(
            Decimal::new(15 + i64::from(seed % 30), 1),
            Decimal::from(15_000 + i64::from(seed % 7) * 1_000),
        )
        .with_service("CMT".to_string(), Decimal::from(8_000))
        .with_service("OBRAS".to_string(), Decimal::from(1_500))
        .with_utility("LISTRIK".to_string(), Decimal::from(750))
        .with_price_off(Decimal::from(60_000 + i64::from(seed % 11) * 2_500))
        .with_margin_percentage(Decimal::from(10))
}

fn costing_benchmark(c: &mut Criterion) {
    let item = sample_item(7);

    c.bench_function("costing_single_line", |b| {
        b.iter(|| CostingCalculator::calculate(black_box(&item)))
    });
}

fn report_benchmark(c: &mut Criterion) {
    let mut order = RabOrder::new("RAB-BENCH-001".to_string()).with_percentages(
        AllocationPercentages::new(Decimal::from(40), Decimal::from(10), Decimal::from(5)),
    );
    for seed in 0..200 {
        order = order.with_line_item(sample_item(seed));
    }

    c.bench_function("full_report_200_lines", |b| {
        b.iter(|| RabCalculator::calculate(black_box(&order)))
    });
}

criterion_group!(benches, costing_benchmark, report_benchmark);
criterion_main!(benches);
