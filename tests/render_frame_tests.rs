use simviz::api::{ChartView, NO_DATA_PLACEHOLDER, build_band_chart, build_line_chart};
use simviz::core::{BandPoint, ChartLayout, DataPoint, Viewport};
use simviz::render::{Color, NullRenderer, PathCommand, Renderer, SvgRenderer};

const INK: Color = Color::rgb(0.0, 0.0, 0.0);

#[test]
fn line_chart_emits_move_then_lines() {
    let layout = ChartLayout::default();
    let view = build_line_chart(
        &[DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)],
        layout,
        INK,
        2.0,
    )
    .expect("build");

    let frame = view.frame().expect("chart");
    let path = &frame.paths[0];
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo { x: 32.0, y: 168.0 },
            PathCommand::LineTo { x: 388.0, y: 32.0 },
        ]
    );
    assert_eq!(path.to_svg_data(), "M 32 168 L 388 32");
    assert!(path.fill.is_none());
}

#[test]
fn empty_series_becomes_placeholder() {
    let layout = ChartLayout::default();
    let line = build_line_chart(&[], layout, INK, 2.0).expect("build");
    let band = build_band_chart(&[], layout, INK, 0.2, 2.0).expect("build");

    assert_eq!(line, ChartView::Placeholder(NO_DATA_PLACEHOLDER.to_owned()));
    assert_eq!(band, ChartView::Placeholder(NO_DATA_PLACEHOLDER.to_owned()));

    let frame = line.to_frame(layout, INK);
    assert!(frame.paths.is_empty());
    assert_eq!(frame.texts[0].text, NO_DATA_PLACEHOLDER);
    assert_eq!(frame.texts[0].x, 210.0);
}

#[test]
fn band_fill_is_translucent_and_drawn_first() {
    let view = build_band_chart(
        &[
            BandPoint::new(10.0, 0.5, 0.4, 0.6),
            BandPoint::new(20.0, 0.52, 0.45, 0.58),
        ],
        ChartLayout::default(),
        Color::from_hex("#8a5d2a").expect("hex"),
        0.2,
        2.0,
    )
    .expect("build");

    let frame = view.frame().expect("chart");
    let fill = frame.paths[0].fill.expect("fill first");
    assert!((fill.alpha - 0.2).abs() <= 1e-12);
    assert!(frame.paths[0].stroke.is_none());
    assert_eq!(frame.paths[1].stroke.expect("center line").width, 2.0);
}

#[test]
fn svg_renderer_writes_paths_and_paint() {
    let view = build_band_chart(
        &[BandPoint::new(0.0, 1.0, 0.0, 2.0), BandPoint::new(1.0, 1.0, 0.0, 2.0)],
        ChartLayout::default(),
        Color::from_hex("#8a5d2a").expect("hex"),
        0.2,
        2.0,
    )
    .expect("build");

    let mut renderer = SvgRenderer::new().with_css_class("chart");
    renderer
        .render(view.frame().expect("chart"))
        .expect("render");

    let document = renderer.document();
    assert!(document.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 420 200\" class=\"chart\">"
    ));
    assert!(document.contains("<path d=\"M 32 168 L 388 168 L 388 32 L 32 32\" fill=\"#8a5d2a\" fill-opacity=\"0.200\" stroke=\"none\"/>"));
    assert!(document.contains("fill=\"none\" stroke=\"#8a5d2a\" stroke-width=\"2\""));
    assert!(document.ends_with("</svg>"));
    assert_eq!(renderer.last_stats().paths_drawn, 2);
}

#[test]
fn renderers_reject_invalid_frames() {
    let mut frame = build_line_chart(
        &[DataPoint::new(0.0, 0.0)],
        ChartLayout::default(),
        INK,
        2.0,
    )
    .expect("build")
    .frame()
    .cloned()
    .expect("chart");
    frame.viewport = Viewport::new(0, 0);

    assert!(NullRenderer::default().render(&frame).is_err());
    assert!(SvgRenderer::new().render(&frame).is_err());
}
