#![forbid(unsafe_code)]

//! Connector routing for rendered family trees.
//!
//! Geometry in, polylines out: the caller measures its tiles and passes them as [`Obstacle`]s;
//! this crate never measures anything itself.

pub mod geom;
pub mod model;
pub mod route;
pub mod svg;

pub use model::{
    ChildLink, ConnectorRequest, Joint, LayoutPoint, LineKind, Obstacle, RoutedConnectors,
    RoutedLine, SpousePair,
};
pub use route::{RouteOptions, Router, route_connectors};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
