use crate::geom::{self, Point, Rect};
use gedtree_core::SpouseStatus;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A rendered element's bounding box, keyed by the individual it shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        geom::rect(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub(crate) fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpousePair {
    pub a: String,
    pub b: String,
    pub status: SpouseStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildLink {
    pub child: String,
    pub parents: Vec<String>,
}

/// Everything to connect. Ids refer to [`Obstacle::id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorRequest {
    pub spouses: Vec<SpousePair>,
    pub children: Vec<ChildLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Spouse(SpouseStatus),
    /// Vertical drop from the parents to the routing level.
    ParentTrunk,
    /// From the routing level into one child.
    ChildBranch,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spouse(SpouseStatus::Married) => "spouse-married",
            Self::Spouse(SpouseStatus::Divorced) => "spouse-divorced",
            Self::Spouse(SpouseStatus::Widowed) => "spouse-widowed",
            Self::ParentTrunk => "parent-trunk",
            Self::ChildBranch => "child-branch",
        }
    }

    /// CSS classes of the emitted SVG element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Spouse(SpouseStatus::Married) => "spouse-line married-line",
            Self::Spouse(SpouseStatus::Divorced) => "spouse-line divorced-line",
            Self::Spouse(SpouseStatus::Widowed) => "spouse-line widowed-line",
            Self::ParentTrunk | Self::ChildBranch => "parent-child-line",
        }
    }
}

impl Serialize for LineKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedLine {
    pub kind: LineKind,
    /// Spouse pair, the parent set of a trunk, or the child of a branch.
    pub connects: Vec<String>,
    pub points: Vec<LayoutPoint>,
}

impl RoutedLine {
    pub fn is_straight(&self) -> bool {
        self.points.len() == 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Joint {
    pub center: LayoutPoint,
    pub radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutedConnectors {
    pub lines: Vec<RoutedLine>,
    pub joints: Vec<Joint>,
}

impl RoutedConnectors {
    pub fn extend(&mut self, other: RoutedConnectors) {
        self.lines.extend(other.lines);
        self.joints.extend(other.joints);
    }
}
