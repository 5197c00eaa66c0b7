//! Vector surface exported as an SVG document.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tagboard_core::{DrawingSurface, ExportError, Point2, Rect, Rgb, Stroke, TextStyle};

const LABEL_FONT: &str = "Consolas, 'DejaVu Sans Mono', monospace";

/// SVG canvas. Elements are kept in draw order; later elements paint over
/// earlier ones.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Full SVG document.
    pub fn to_svg_string(&self) -> String {
        let (w, h) = (self.width, self.height);
        let body: usize = self.elements.iter().map(|e| e.len() + 1).sum();
        let mut doc = String::with_capacity(128 + body);
        doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" shape-rendering=\"crispEdges\">"
        );
        for element in &self.elements {
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.is_empty() {
            return;
        }
        self.elements.push(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            color.to_hex()
        ));
    }

    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, stroke: Stroke) {
        self.elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke.color.to_hex(),
            stroke.width
        ));
    }

    fn draw_text(&mut self, anchor: Point2<f32>, text: &str, style: TextStyle) {
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{LABEL_FONT}\" font-weight=\"bold\" \
             font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\" \
             dominant-baseline=\"central\">{}</text>",
            anchor.x,
            anchor.y,
            style.size,
            style.color.to_hex(),
            escape_text(text)
        ));
    }

    fn export(&self, path: &Path) -> Result<(), ExportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_canvas_size_and_elements() {
        let mut s = SvgSurface::new(275, 120);
        s.draw_filled_rect(Rect::new(25.0, 25.0, 12.5, 10.0), Rgb::BLACK);
        s.draw_filled_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Rgb::BLACK);
        let doc = s.to_svg_string();
        assert!(doc.contains("width=\"275\" height=\"120\" viewBox=\"0 0 275 120\""));
        assert!(
            doc.contains("<rect x=\"25\" y=\"25\" width=\"12.5\" height=\"10\" fill=\"#000000\"/>")
        );
        assert_eq!(s.element_count(), 1);
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut s = SvgSurface::new(10, 10);
        s.draw_text(
            Point2::new(5.0, 5.0),
            "a<b&c",
            TextStyle {
                size: 20.0,
                color: Rgb::DARK_BLUE,
            },
        );
        let doc = s.to_svg_string();
        assert!(doc.contains(">a&lt;b&amp;c</text>"));
        assert!(doc.contains("fill=\"#00008b\""));
        assert!(doc.contains(
            "font-weight=\"bold\" font-size=\"20\" fill=\"#00008b\" text-anchor=\"middle\" \
             dominant-baseline=\"central\">"
        ));
    }

    #[test]
    fn export_writes_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.svg");
        let mut s = SvgSurface::new(10, 10);
        s.draw_line(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Stroke {
                width: 3.0,
                color: Rgb::RED,
            },
        );
        s.export(&path).expect("export");
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(written, s.to_svg_string());
        assert!(written.contains("stroke=\"#ff0000\" stroke-width=\"3\""));
    }
}
