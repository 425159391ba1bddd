use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer that serializes each frame into a standalone SVG document.
///
/// The last document is kept until the next `render` call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    css_class: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `class` attribute emitted on the root `<svg>` element.
    #[must_use]
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.viewport.width, frame.viewport.height);

        write!(out, "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\"")
            .map_err(map_fmt_error)?;
        if let Some(class) = &self.css_class {
            write!(out, " class=\"{}\"", escape_xml(class)).map_err(map_fmt_error)?;
        }
        out.push('>');

        for path in &frame.paths {
            write_path(&mut out, path)?;
            stats.paths_drawn += 1;
        }
        for text in &frame.texts {
            write_text(&mut out, text)?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_path(out: &mut String, path: &PathPrimitive) -> ChartResult<()> {
    write!(out, "<path d=\"{}\"", path.to_svg_data()).map_err(map_fmt_error)?;
    match path.fill {
        Some(fill) => write_paint(out, "fill", fill)?,
        None => out.push_str(" fill=\"none\""),
    }
    match path.stroke {
        Some(stroke) => {
            write_paint(out, "stroke", stroke.color)?;
            write!(out, " stroke-width=\"{}\"", stroke.width).map_err(map_fmt_error)?;
        }
        None => out.push_str(" stroke=\"none\""),
    }
    out.push_str("/>");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> ChartResult<()> {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{anchor}\"",
        text.x, text.y, text.font_size_px
    )
    .map_err(map_fmt_error)?;
    write_paint(out, "fill", text.color)?;
    write!(out, ">{}</text>", escape_xml(&text.text)).map_err(map_fmt_error)
}

fn write_paint(out: &mut String, attribute: &str, color: Color) -> ChartResult<()> {
    write!(out, " {attribute}=\"{}\"", color.to_hex_rgb()).map_err(map_fmt_error)?;
    if color.alpha < 1.0 {
        write!(out, " {attribute}-opacity=\"{:.3}\"", color.alpha).map_err(map_fmt_error)?;
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg document: {err}"))
}
