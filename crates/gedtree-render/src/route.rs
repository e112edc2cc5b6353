//! Manhattan connector routing around rendered tiles.
//!
//! Pure geometry: callers measure their elements and hand over plain rectangles. Nothing here
//! knows about generations or GEDCOM beyond the ids used to look tiles up.

use crate::geom::{Rect, overlaps_x_span, spans_y};
use crate::model::{
    ConnectorRequest, Joint, LayoutPoint, LineKind, Obstacle, RoutedConnectors, RoutedLine,
};
use crate::{Error, Result};
use gedtree_core::{SpouseStatus, TreeConfig};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    /// Clearance kept around every tile.
    pub margin: f64,
    /// Vertical offset between sibling branches.
    pub parallel_spacing: f64,
    /// How far below the lower spouse tile a detour runs.
    pub spouse_drop_offset: f64,
    pub joint_radius: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            margin: 20.0,
            parallel_spacing: 10.0,
            spouse_drop_offset: 15.0,
            joint_radius: 4.0,
        }
    }
}

impl RouteOptions {
    /// Reads `routing.*` overrides; missing keys keep their defaults.
    pub fn from_config(config: &TreeConfig) -> Result<Self> {
        let mut options = Self::default();
        let slots = [
            ("routing.margin", &mut options.margin),
            ("routing.parallelSpacing", &mut options.parallel_spacing),
            ("routing.spouseDropOffset", &mut options.spouse_drop_offset),
            ("routing.jointRadius", &mut options.joint_radius),
        ];
        for (key, slot) in slots {
            let Some(value) = config.get_f64(key) else {
                continue;
            };
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidGeometry {
                    message: format!("`{key}` must be a non-negative number, got {value}"),
                });
            }
            *slot = value;
        }
        Ok(options)
    }
}

pub struct Router<'a> {
    obstacles: &'a [Obstacle],
    by_id: HashMap<&'a str, usize>,
    options: RouteOptions,
}

impl<'a> Router<'a> {
    pub fn new(obstacles: &'a [Obstacle], options: RouteOptions) -> Result<Self> {
        let mut by_id: HashMap<&'a str, usize> = HashMap::default();
        for (idx, obstacle) in obstacles.iter().enumerate() {
            if !obstacle.is_valid() {
                return Err(Error::InvalidGeometry {
                    message: format!(
                        "obstacle `{}` has a non-finite or negative box ({}, {}, {}, {})",
                        obstacle.id, obstacle.x, obstacle.y, obstacle.width, obstacle.height
                    ),
                });
            }
            by_id.entry(obstacle.id.as_str()).or_insert(idx);
        }
        Ok(Self {
            obstacles,
            by_id,
            options,
        })
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    fn rect_of(&self, id: &str) -> Option<Rect> {
        self.by_id.get(id).map(|&idx| self.obstacles[idx].rect())
    }

    /// Tiles other than `exclude`, inflated by the margin.
    fn inflated_others<'s>(&'s self, exclude: &'s [&'s str]) -> impl Iterator<Item = Rect> + 's {
        let m = self.options.margin;
        self.obstacles
            .iter()
            .filter(move |o| !exclude.contains(&o.id.as_str()))
            .map(move |o| o.rect().inflate(m, m))
    }

    /// Straight between the two centers unless another tile crosses that span, otherwise a
    /// detour below both tiles.
    pub fn route_spouse(&self, a: &str, b: &str, status: SpouseStatus) -> Option<RoutedLine> {
        let ra = self.rect_of(a)?;
        let rb = self.rect_of(b)?;
        let (ca, cb) = (ra.center(), rb.center());

        let exclude = [a, b];
        let blocked = self
            .inflated_others(&exclude)
            .any(|r| overlaps_x_span(&r, ca.x, cb.x) && spans_y(&r, ca.y));

        let points = if blocked {
            let drop = ra.max_y().max(rb.max_y()) + self.options.spouse_drop_offset;
            vec![
                LayoutPoint::new(ca.x, ra.max_y()),
                LayoutPoint::new(ca.x, drop),
                LayoutPoint::new(cb.x, drop),
                LayoutPoint::new(cb.x, rb.max_y()),
            ]
        } else {
            vec![ca.into(), cb.into()]
        };

        Some(RoutedLine {
            kind: LineKind::Spouse(status),
            connects: vec![a.to_string(), b.to_string()],
            points,
        })
    }

    /// One trunk from the parents down to a shared routing level, then a branch per child.
    ///
    /// Returns `None` when no parent or no child has a tile.
    pub fn route_children(&self, parents: &[&str], children: &[&str]) -> Option<RoutedConnectors> {
        let parent_rects: Vec<Rect> = parents.iter().filter_map(|p| self.rect_of(p)).collect();
        let (parent_x, parent_bottom) = match parent_rects.as_slice() {
            [] => return None,
            [only] => (only.center().x, only.max_y()),
            [first, second, ..] => (
                (first.center().x + second.center().x) / 2.0,
                first.max_y().max(second.max_y()),
            ),
        };

        let mut kids: Vec<(&str, Rect)> = children
            .iter()
            .filter_map(|c| Some((*c, self.rect_of(c)?)))
            .collect();
        if kids.is_empty() {
            return None;
        }
        kids.sort_by(|a, b| a.1.center().x.total_cmp(&b.1.center().x));

        let shallowest_top = kids
            .iter()
            .map(|(_, r)| r.min_y())
            .fold(f64::INFINITY, f64::min);
        let (span_min, span_max) = kids.iter().fold((parent_x, parent_x), |(lo, hi), (_, r)| {
            let x = r.center().x;
            (lo.min(x), hi.max(x))
        });

        let margin = self.options.margin;
        let exclude: Vec<&str> = parents.iter().chain(children.iter()).copied().collect();
        let in_between_bottom = self
            .obstacles
            .iter()
            .filter(|o| !exclude.contains(&o.id.as_str()))
            .map(Obstacle::rect)
            .filter(|r| r.min_y() > parent_bottom && r.max_y() < shallowest_top)
            .filter(|r| overlaps_x_span(&r.inflate(margin, margin), span_min, span_max))
            .map(|r| r.max_y())
            .reduce(f64::max);

        let routing_y = match in_between_bottom {
            Some(bottom) => (bottom + margin).min(shallowest_top),
            None => (parent_bottom + shallowest_top) / 2.0,
        };

        let mut out = RoutedConnectors::default();
        out.lines.push(RoutedLine {
            kind: LineKind::ParentTrunk,
            connects: parents.iter().map(|p| p.to_string()).collect(),
            points: vec![
                LayoutPoint::new(parent_x, parent_bottom),
                LayoutPoint::new(parent_x, routing_y),
            ],
        });

        for (i, &(child, r)) in kids.iter().enumerate() {
            let offset = i as f64 * self.options.parallel_spacing;
            let level = (routing_y + offset).min(r.min_y());
            let mut branch_exclude = parents.to_vec();
            branch_exclude.push(child);

            let mut points = vec![
                LayoutPoint::new(parent_x, routing_y),
                LayoutPoint::new(parent_x, level),
            ];
            self.extend_branch(&mut points, level, r, offset, &branch_exclude);
            points.dedup();
            out.lines.push(RoutedLine {
                kind: LineKind::ChildBranch,
                connects: vec![child.to_string()],
                points,
            });
        }

        let radius = self.options.joint_radius;
        out.joints.push(Joint {
            center: LayoutPoint::new(parent_x, parent_bottom),
            radius,
        });
        out.joints.push(Joint {
            center: LayoutPoint::new(parent_x, routing_y),
            radius,
        });
        Some(out)
    }

    /// Continues a branch from its last point at `level` down into the top of `target`.
    ///
    /// Tiles sitting above the target push the descent into a side column next to them; tiles on
    /// the horizontal run are hopped over from above.
    fn extend_branch(
        &self,
        points: &mut Vec<LayoutPoint>,
        level: f64,
        target: Rect,
        offset: f64,
        exclude: &[&str],
    ) {
        let start_x = points.last().map_or(target.center().x, |p| p.x);
        let child_x = target.center().x;
        let child_top = target.min_y();

        let over_target = self
            .inflated_others(exclude)
            .filter(|r| overlaps_x_span(r, child_x, child_x))
            .filter(|r| r.max_y() > level && r.min_y() < child_top)
            .fold(None, |acc: Option<(f64, f64, f64)>, r| {
                Some(match acc {
                    None => (r.min_x(), r.max_x(), r.max_y()),
                    Some((lo, hi, bottom)) => {
                        (lo.min(r.min_x()), hi.max(r.max_x()), bottom.max(r.max_y()))
                    }
                })
            });

        let Some((lo, hi, bottom)) = over_target else {
            self.run_horizontal(points, start_x, child_x, level, offset, exclude);
            points.push(LayoutPoint::new(child_x, child_top));
            return;
        };

        let (left, right) = (child_x - lo, hi - child_x);
        let column_x = if left < right || (left == right && start_x <= child_x) {
            lo
        } else {
            hi
        };
        let below = bottom.min(child_top);

        tracing::trace!(child_x, column_x, below, "branch steps aside from a tile");
        self.run_horizontal(points, start_x, column_x, level, offset, exclude);
        points.push(LayoutPoint::new(column_x, below));
        points.push(LayoutPoint::new(child_x, below));
        points.push(LayoutPoint::new(child_x, child_top));
    }

    /// Horizontal run at `y` ending at `to_x`, lifting over every tile in the way.
    fn run_horizontal(
        &self,
        points: &mut Vec<LayoutPoint>,
        from_x: f64,
        to_x: f64,
        y: f64,
        offset: f64,
        exclude: &[&str],
    ) {
        let forward = to_x >= from_x;
        let mut in_the_way: Vec<Rect> = self
            .inflated_others(exclude)
            .filter(|r| r.min_y() < y && y < r.max_y() && overlaps_x_span(r, from_x, to_x))
            .collect();
        if forward {
            in_the_way.sort_by(|a, b| a.min_x().total_cmp(&b.min_x()));
        } else {
            in_the_way.sort_by(|a, b| b.max_x().total_cmp(&a.max_x()));
        }

        let mut x = from_x;
        for r in in_the_way {
            let (near, far) = if forward {
                (r.min_x(), r.max_x())
            } else {
                (r.max_x(), r.min_x())
            };
            let ahead = if forward {
                x < far && to_x > near
            } else {
                x > far && to_x < near
            };
            if !ahead {
                continue;
            }
            let lift_x = if forward { x.max(near) } else { x.min(near) };
            let pass_x = if forward { far.min(to_x) } else { far.max(to_x) };
            let over_y = r.min_y() - offset;
            points.push(LayoutPoint::new(lift_x, y));
            points.push(LayoutPoint::new(lift_x, over_y));
            points.push(LayoutPoint::new(pass_x, over_y));
            points.push(LayoutPoint::new(pass_x, y));
            x = pass_x;
        }
        points.push(LayoutPoint::new(to_x, y));
    }

    /// Routes a whole request: each spouse pair once, and one trunk per distinct parent set.
    pub fn route(&self, request: &ConnectorRequest) -> RoutedConnectors {
        let mut out = RoutedConnectors::default();

        let mut seen_pairs: IndexSet<(&str, &str)> = IndexSet::new();
        for pair in &request.spouses {
            let key = if pair.a <= pair.b {
                (pair.a.as_str(), pair.b.as_str())
            } else {
                (pair.b.as_str(), pair.a.as_str())
            };
            if !seen_pairs.insert(key) {
                continue;
            }
            match self.route_spouse(&pair.a, &pair.b, pair.status) {
                Some(line) => out.lines.push(line),
                None => tracing::trace!(a = %pair.a, b = %pair.b, "spouse pair without tiles"),
            }
        }

        let mut families: IndexMap<Vec<&str>, Vec<&str>> = IndexMap::new();
        for link in &request.children {
            if link.parents.is_empty() {
                continue;
            }
            let mut key: Vec<&str> = link.parents.iter().map(String::as_str).collect();
            key.sort_unstable();
            key.dedup();
            families.entry(key).or_default().push(link.child.as_str());
        }
        for (parents, children) in &families {
            if let Some(routed) = self.route_children(parents, children) {
                out.extend(routed);
            }
        }

        tracing::debug!(
            lines = out.lines.len(),
            joints = out.joints.len(),
            families = families.len(),
            "routed connectors"
        );
        out
    }
}

/// Validates the geometry and routes `request` in one call.
pub fn route_connectors(
    obstacles: &[Obstacle],
    request: &ConnectorRequest,
    options: RouteOptions,
) -> Result<RoutedConnectors> {
    Ok(Router::new(obstacles, options)?.route(request))
}
