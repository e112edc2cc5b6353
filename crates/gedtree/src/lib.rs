#![forbid(unsafe_code)]

//! `gedtree` is a headless family-tree engine for GEDCOM files.
//!
//! Parse once with an [`Engine`], then query the resulting [`FamilyTree`]: generations, display
//! order, kinship paths, the central-person view and search. [`TreeHandle`] swaps trees
//! atomically when the source file changes.
//!
//! # Features
//!
//! - `render`: connector routing and SVG output (`gedtree::render`)

pub use gedtree_core::*;
pub use gedtree_layout::{
    FounderPolicy, GenerationMap, GenerationOptions, KinGraph, MarriageGroup, ParentlessPolicy,
    PathHop, RelationshipKind, RootPolicy,
};

mod central;
mod handle;
mod search;
mod summary;
mod tree;

pub use central::CentralView;
pub use handle::TreeHandle;
pub use search::{DEFAULT_SEARCH_LIMIT, SearchHit};
pub use summary::{PathStep, PersonSummary};
pub use tree::FamilyTree;

use std::path::{Path, PathBuf};

#[cfg(feature = "render")]
pub mod render {
    pub use gedtree_render::svg::render_connectors_svg;
    pub use gedtree_render::{
        ChildLink, ConnectorRequest, Joint, LayoutPoint, LineKind, Obstacle, RouteOptions,
        RoutedConnectors, RoutedLine, Router, SpousePair, route_connectors,
    };
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error(transparent)]
    Core(#[from] gedtree_core::Error),

    #[cfg(feature = "render")]
    #[error(transparent)]
    Render(#[from] gedtree_render::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses GEDCOM text into [`FamilyTree`]s under one validated configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    config: TreeConfig,
    generation: GenerationOptions,
    #[cfg(feature = "render")]
    route_options: gedtree_render::RouteOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: TreeConfig::defaults(),
            generation: GenerationOptions::default(),
            #[cfg(feature = "render")]
            route_options: gedtree_render::RouteOptions::default(),
        }
    }
}

impl Engine {
    fn parse_timing_enabled() -> bool {
        static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
        *ENABLED.get_or_init(|| match std::env::var("GEDTREE_PARSE_TIMING").as_deref() {
            Ok("1") | Ok("true") => true,
            _ => false,
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Lays `config` over the built-in defaults, rejecting unknown root policies and bad
    /// routing values.
    pub fn with_config(mut self, config: TreeConfig) -> Result<Self> {
        let config = config.with_defaults();
        self.generation = GenerationOptions::from_config(&config)?;
        #[cfg(feature = "render")]
        {
            self.route_options = gedtree_render::RouteOptions::from_config(&config)?;
        }
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn generation_options(&self) -> GenerationOptions {
        self.generation
    }

    /// Never fails: malformed input yields a partial (possibly empty) tree.
    pub fn parse(&self, text: &str) -> FamilyTree {
        let timing_enabled = Self::parse_timing_enabled();
        let total_start = timing_enabled.then(std::time::Instant::now);

        let parse_start = timing_enabled.then(std::time::Instant::now);
        let gedcom = gedtree_core::parse(text);
        let parse = parse_start.map(|s| s.elapsed());

        let derive_start = timing_enabled.then(std::time::Instant::now);
        let id_map = IdMap::from_gedcom(&gedcom);
        let graph = KinGraph::from_gedcom(&gedcom);
        let generations = gedtree_layout::assign_generations_with(&graph, self.generation);
        let derive = derive_start.map(|s| s.elapsed());

        if let Some(start) = total_start {
            tracing::debug!(
                total = ?start.elapsed(),
                parse = ?parse.unwrap_or_default(),
                derive = ?derive.unwrap_or_default(),
                individuals = gedcom.individuals.len(),
                families = gedcom.families.len(),
                input_bytes = text.len(),
                "parse timing"
            );
        }

        FamilyTree {
            gedcom,
            id_map,
            graph,
            generations,
            #[cfg(feature = "render")]
            route_options: self.route_options,
        }
    }

    /// Reads and parses a file. Read failures are reported; content problems are not.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<FamilyTree> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded GEDCOM file");
        Ok(self.parse(&text))
    }
}
