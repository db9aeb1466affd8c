#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use savings_projection::api::{ChartKind, ProjectionInputs, ProjectionSession};
use savings_projection::core::{SurfaceLayout, Viewport};
use savings_projection::render::{CairoContextRenderer, CairoRenderer, Color, Renderer};
use savings_projection::ProjectionError;

fn computed_session() -> ProjectionSession {
    let mut session = ProjectionSession::new();
    session
        .compute(&ProjectionInputs::default())
        .expect("compute");
    session
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = SurfaceLayout::new(Viewport::new(0, 480), 1)
        .and_then(CairoRenderer::new)
        .expect_err("invalid width must fail");
    assert!(matches!(err, ProjectionError::InvalidViewport { .. }));
}

#[test]
fn cairo_renderer_draws_comparison_chart() {
    let session = computed_session();
    let layout = SurfaceLayout::for_host_width(720, 1.0);
    let mut renderer = CairoRenderer::new(layout).expect("renderer");

    session
        .render_chart(ChartKind::Comparison, layout, &mut renderer)
        .expect("render");
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.polylines_drawn, 6);
    assert_eq!(stats.circles_drawn, 5);
    assert_eq!(stats.texts_drawn, 7);
}

#[test]
fn cairo_renderer_scales_backing_store_for_dense_displays() {
    let session = computed_session();
    let layout = SurfaceLayout::for_host_width(600, 2.0);
    let mut renderer = CairoRenderer::new(SurfaceLayout::for_host_width(300, 1.0))
        .expect("renderer");

    session
        .render_chart(ChartKind::Savings, layout, &mut renderer)
        .expect("render");
    assert_eq!(renderer.layout(), layout);
    assert_eq!(renderer.surface().width(), 1_200);
    assert_eq!(renderer.surface().height(), 624);
}

#[test]
fn cairo_renderer_clears_for_empty_session() {
    let session = ProjectionSession::new();
    let layout = SurfaceLayout::for_host_width(480, 1.0);
    let mut renderer = CairoRenderer::new(layout).expect("renderer");
    renderer
        .set_background(Some(Color::rgb(0.05, 0.07, 0.1)))
        .expect("background");

    session
        .render_chart(ChartKind::CompoundInterest, layout, &mut renderer)
        .expect("render");
    assert_eq!(renderer.last_stats().polylines_drawn, 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let session = computed_session();
    let layout = SurfaceLayout::for_host_width(600, 1.0);
    let frame = session
        .build_chart_frame(ChartKind::SimpleInterest, layout)
        .expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 600, 312).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = CairoRenderer::new(layout).expect("renderer");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    assert_eq!(renderer.last_stats().polylines_drawn, 2);
    assert_eq!(renderer.last_stats().texts_drawn, 2);
}

#[test]
fn cairo_renderer_writes_png() {
    let session = computed_session();
    let layout = SurfaceLayout::for_host_width(400, 1.0);
    let mut renderer = CairoRenderer::new(layout).expect("renderer");
    renderer.render(
        &session
            .build_chart_frame(ChartKind::Comparison, layout)
            .expect("frame"),
    )
    .expect("render");

    let path = std::env::temp_dir().join("savings_projection_cairo_test.png");
    renderer.write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(&path);
}
