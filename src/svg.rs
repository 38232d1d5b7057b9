//! SVG visualization of clipped blits.
//!
//! Draws the source surface and the destination surface as two stacked
//! panels. Each panel shows the surface bounds, the region that was asked
//! for (dashed, possibly hanging off the surface), and the region that
//! survived clipping.
//!
//! # Example
//!
//! ```
//! use zenregion::{Area, IVec2, clipped_src_dst, svg::render_blit_svg};
//!
//! let src_bounds = Area::new(0, 0, 100, 100);
//! let dst_bounds = Area::new(0, 0, 200, 200);
//! let request = Area::new(-10, -10, 50, 50);
//! let blit = clipped_src_dst(&src_bounds, &request, &dst_bounds, IVec2::ZERO);
//!
//! let svg = render_blit_svg(&src_bounds, &request, &dst_bounds, IVec2::ZERO, &blit);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::area::Area;
use crate::blit::{ClippedBlit, ClippedScaledBlit};
use crate::mapping::RectMapping;
use crate::rect::Rectf;
use crate::vector::IVec2;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f32 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f32 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f32 = 50.0;
/// Horizontal margin.
const MARGIN_X: f32 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f32 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f32 = 22.0;

/// One panel: a surface and the regions drawn on it.
struct Panel {
    label: String,
    surface: Area,
    shapes: Vec<Shape>,
    annotation: String,
}

/// A region drawn on a panel, in the panel's surface coordinates.
struct Shape {
    rect: Rectf,
    class: &'static str,
}

/// Render a same-size blit from [`clipped_src_dst`](crate::clipped_src_dst).
///
/// `request` and `dst_lt` are the arguments the blit was computed from, so
/// the picture can show what was cut away.
pub fn render_blit_svg(
    src_bounds: &Area,
    request: &Area,
    dst_bounds: &Area,
    dst_lt: IVec2,
    blit: &ClippedBlit,
) -> String {
    let requested_dst = request.moved_ul_to(dst_lt);
    let panels = [
        Panel {
            label: format!("Source  {}×{}", src_bounds.width(), src_bounds.height()),
            surface: *src_bounds,
            shapes: vec![
                Shape {
                    rect: Rectf::from(*request),
                    class: "requested",
                },
                Shape {
                    rect: Rectf::from(blit.src),
                    class: "clipped",
                },
            ],
            annotation: format!("read {}", blit.src),
        },
        Panel {
            label: format!("Destination  {}×{}", dst_bounds.width(), dst_bounds.height()),
            surface: *dst_bounds,
            shapes: vec![
                Shape {
                    rect: Rectf::from(requested_dst),
                    class: "requested",
                },
                Shape {
                    rect: Rectf::from(blit.dst_area()),
                    class: "clipped",
                },
            ],
            annotation: format!("write {} at {}", blit.dst_area(), blit.dst_lt),
        },
    ];
    render_panels(&panels)
}

/// Render a scaling blit from [`clipped_scaled_rects`](crate::clipped_scaled_rects).
pub fn render_scaled_blit_svg(
    src_bounds: &Area,
    src_rect: &Rectf,
    dst_bounds: &Area,
    dst_area: &Area,
    blit: &ClippedScaledBlit,
) -> String {
    let panels = [
        Panel {
            label: format!("Source  {}×{}", src_bounds.width(), src_bounds.height()),
            surface: *src_bounds,
            shapes: vec![
                Shape {
                    rect: *src_rect,
                    class: "requested",
                },
                Shape {
                    rect: blit.src,
                    class: "clipped",
                },
            ],
            annotation: format!("sample {}", blit.src),
        },
        Panel {
            label: format!("Destination  {}×{}", dst_bounds.width(), dst_bounds.height()),
            surface: *dst_bounds,
            shapes: vec![
                Shape {
                    rect: Rectf::from(*dst_area),
                    class: "requested",
                },
                Shape {
                    rect: Rectf::from(blit.dst),
                    class: "clipped",
                },
            ],
            annotation: format!("write {}", blit.dst),
        },
    ];
    render_panels(&panels)
}

/// Render panels into a complete SVG document.
fn render_panels(panels: &[Panel]) -> String {
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = 2.0 * MARGIN_TOP
        + panels.len() as f32 * (LABEL_H + MAX_PANEL_H)
        + panels.len().saturating_sub(1) as f32 * PANEL_GAP;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .surface { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .requested { fill: none; stroke: #c0504d; stroke-width: 1; stroke-dasharray: 4,2; }
  .clipped { fill: #6ba3d6; fill-opacity: 0.8; stroke: #2c6faa; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .surface { fill: #2d2d2d; stroke: #555; }
    .requested { stroke: #e07a77; }
    .clipped { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##,
    );

    svg.push_str(
        r##"<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        // The view covers the surface plus anything requested outside it.
        let mut view = Rectf::from(panel.surface);
        for shape in &panel.shapes {
            view.include_rect(&shape.rect);
        }
        let frame = Rectf::new(
            center_x - MAX_PANEL_W / 2.0,
            y,
            center_x + MAX_PANEL_W / 2.0,
            y + MAX_PANEL_H,
        );
        let to_panel = RectMapping::try_new(view, frame)
            .map(|m| RectMapping::preserving_aspect(m.src_rect(), m.dst_rect()))
            .ok();

        if let Some(to_panel) = to_panel {
            push_rect(&mut svg, &to_panel.map_rect(&Rectf::from(panel.surface)), "surface");
            for shape in &panel.shapes {
                push_rect(&mut svg, &to_panel.map_rect(&shape.rect), shape.class);
            }
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + MAX_PANEL_H + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;

        if i < panels.len() - 1 {
            let arrow_top = y + 18.0;
            let arrow_bot = y + PANEL_GAP - 4.0;
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x, arrow_top, center_x, arrow_bot
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_rect(svg: &mut String, r: &Rectf, class: &str) {
    let r = r.canonicalized();
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
        r.x1,
        r.y1,
        r.width(),
        r.height(),
        class
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
