//! SVG emission for routed connectors.

use crate::model::{LayoutPoint, RoutedConnectors};
use std::fmt::Write as _;

/// Attribute number: rounded to thousandths, trailing zeros trimmed, never `-0`.
///
/// Non-finite values print as `0`; the router rejects them before anything is emitted.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut s = format!("{rounded:.3}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
    s.truncate(trimmed);
    s
}

/// `M x,y L x,y ...`; empty for an empty polyline.
pub fn path_data(points: &[LayoutPoint]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(&mut out, "{cmd} {},{}", fmt(p.x), fmt(p.y));
    }
    out
}

pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A standalone `<svg class="tree-lines">` overlay: one `<path>` per line, then the joints.
pub fn render_connectors_svg(connectors: &RoutedConnectors, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="tree-lines" width="{}" height="{}">"#,
        fmt(width),
        fmt(height)
    );
    for line in &connectors.lines {
        if line.points.is_empty() {
            continue;
        }
        let _ = write!(
            &mut out,
            r#"<path d="{}" class="{}" data-connects="{}"/>"#,
            path_data(&line.points),
            line.kind.css_class(),
            escape_attr(&line.connects.join(","))
        );
    }
    for joint in &connectors.joints {
        let _ = write!(
            &mut out,
            r#"<circle cx="{}" cy="{}" r="{}" class="solder-joint"/>"#,
            fmt(joint.center.x),
            fmt(joint.center.y),
            fmt(joint.radius)
        );
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_noise_and_negative_zero() {
        assert_eq!(fmt(10.0), "10");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(12.5), "12.5");
        assert_eq!(fmt(99.99999999), "100");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn fmt_rounds_to_thousandths() {
        assert_eq!(fmt(1.23456), "1.235");
        assert_eq!(fmt(2.0 / 3.0), "0.667");
        assert_eq!(fmt(-12.5), "-12.5");
        assert_eq!(fmt(-0.0004), "0");
        assert_eq!(fmt(130.0), "130");
        assert_eq!(fmt(f64::INFINITY), "0");
    }

    #[test]
    fn path_data_uses_move_then_line_commands() {
        let pts = [
            LayoutPoint::new(0.0, 0.0),
            LayoutPoint::new(0.0, 12.5),
            LayoutPoint::new(40.0, 12.5),
        ];
        assert_eq!(path_data(&pts), "M 0,0 L 0,12.5 L 40,12.5");
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn escape_attr_escapes_markup() {
        assert_eq!(escape_attr(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
