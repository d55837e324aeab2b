//! Performance benchmarks for frame rendering
//!
//! Measures a full frame per section, settled and mid-transition.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::adapters::mock::RecordingLinkOpener;
use folio::app::App;
use folio::config::FolioConfig;
use folio::profile::ProfileRecord;
use folio::ui::render_to_buffer;
use folio::view_state::Section;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn bench_app(animations: bool) -> App {
    let config = FolioConfig::default().with_animations(animations);
    App::new(
        Arc::new(ProfileRecord::sample()),
        &config,
        Box::new(RecordingLinkOpener::new()),
    )
}

/// Benchmark a settled frame of every section at two terminal sizes
fn bench_settled_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("settled_frame");

    for (width, height) in [(80u16, 24u16), (160, 50)] {
        for section in Section::ALL {
            let mut app = bench_app(false);
            app.select_section(section);
            if section == Section::Projects {
                app.hover_start(1);
            }
            let area = Rect::new(0, 0, width, height);
            let mut buffer = Buffer::empty(area);
            let id = format!("{:?}_{}x{}", section, width, height);

            group.bench_with_input(BenchmarkId::from_parameter(id), &area, |b, &area| {
                b.iter(|| {
                    buffer.reset();
                    render_to_buffer(&mut buffer, black_box(area), &mut app);
                })
            });
        }
    }

    group.finish();
}

/// Benchmark frames sampled while a panel switch is in flight
fn bench_transition_frames(c: &mut Criterion) {
    c.bench_function("transition_frame", |b| {
        let area = Rect::new(0, 0, 120, 40);
        let mut buffer = Buffer::empty(area);
        let mut app = bench_app(true);
        let mut next = Section::About;
        b.iter(|| {
            if !app.transition.is_animating() {
                next = next.next();
                app.select_section(next);
            }
            app.tick();
            buffer.reset();
            render_to_buffer(&mut buffer, area, &mut app);
            black_box(&buffer);
        })
    });
}

criterion_group!(benches, bench_settled_frames, bench_transition_frames);
criterion_main!(benches);
