use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use strata_core::api::Engine;
use strata_core::geometry::Rect;
use strata_core::input::PageFragments;
use strata_core::layout::Fragment;

const PAGE_BBOX: Rect = Rect {
    x1: 0.0,
    y1: 0.0,
    x2: 612.0,
    y2: 792.0,
};

struct XorShift64(u64);

impl XorShift64 {
    fn gen_f64(&mut self, lo: f64, hi: f64) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        lo + (self.0 >> 11) as f64 / (1u64 << 53) as f64 * (hi - lo)
    }
}

/// A statement-like page: title block, `rows` table rows with a label and
/// two figures, and a closing paragraph.
fn generate_page(seed: u64, rows: usize) -> PageFragments {
    let mut rng = XorShift64(seed | 1);
    let mut page = PageFragments::new(1, PAGE_BBOX);
    let mut push = |text: &str, x1: f64, y1: f64, x2: f64| {
        page.fragments
            .push(Fragment::new(text, Rect::new(x1, y1, x2, y1 + 10.0)));
    };

    push("ACME HOLDINGS LIMITED", 230.0, 750.0, 382.0);
    push("PROFIT AND LOSS ACCOUNT", 220.0, 735.0, 392.0);
    push("FOR THE YEAR ENDED 31 MARCH 2019", 200.0, 720.0, 412.0);

    let mut y = 690.0;
    for i in 0..rows {
        let jitter = rng.gen_f64(-1.5, 1.5);
        push(&format!("Line item {i}"), 36.0, y + jitter, 150.0);
        push(&format!("{},{:03}", i + 1, i * 7 % 1000), 400.0, y, 440.0 + jitter);
        push(&format!("{},{:03}", i + 2, i * 3 % 1000), 500.0, y + jitter, 540.0);
        y -= 14.0;
    }
    push(
        "The notes on pages 5 to 9 form part of these financial statements",
        36.0,
        40.0,
        560.0,
    );
    page
}

fn bench_analyze_page(c: &mut Criterion) {
    let engine = Engine::default();
    let mut group = c.benchmark_group("layout_analyze_page");

    for &rows in &[10usize, 40, 160] {
        let page = generate_page(0x5eed ^ rows as u64, rows);
        group.throughput(Throughput::Elements(page.fragments.len() as u64));
        group.bench_with_input(BenchmarkId::new("document", rows), &page, |b, page| {
            b.iter(|| {
                let layout = engine.analyze_page(page);
                black_box(engine.compose(&layout).blocks.len());
            })
        });
        group.bench_with_input(BenchmarkId::new("tabular", rows), &page, |b, page| {
            b.iter(|| black_box(engine.tabulate(page).map(|t| t.grid.rows().len())))
        });
    }

    group.finish();
}

criterion_group!(layout_benches, bench_analyze_page);
criterion_main!(layout_benches);
