pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(point(x, y), euclid::size2(width, height))
}

/// Open-interval overlap on the x axis between `r` and the span `[x0, x1]`.
pub fn overlaps_x_span(r: &Rect, x0: f64, x1: f64) -> bool {
    r.min_x() < x1.max(x0) && r.max_x() > x0.min(x1)
}

/// Whether the horizontal line at `y` crosses `r` (edges included).
pub fn spans_y(r: &Rect, y: f64) -> bool {
    r.min_y() <= y && y <= r.max_y()
}
