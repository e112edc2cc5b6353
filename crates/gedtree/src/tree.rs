use gedtree_core::{Gedcom, IdMap, Individual, Relations, gedcom_id_to_display_id};
use gedtree_layout::{
    GenerationMap, KinGraph, PathHop, RelationshipKind, find_path, labelled_path,
    relationship_type,
};

/// A parsed file plus everything derived from it.
///
/// Immutable once built; a reload produces a new value (see [`crate::TreeHandle`]).
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    pub(crate) gedcom: Gedcom,
    pub(crate) id_map: IdMap,
    pub(crate) graph: KinGraph,
    pub(crate) generations: GenerationMap,
    #[cfg(feature = "render")]
    pub(crate) route_options: gedtree_render::RouteOptions,
}

impl FamilyTree {
    pub fn gedcom(&self) -> &Gedcom {
        &self.gedcom
    }

    pub fn id_map(&self) -> &IdMap {
        &self.id_map
    }

    pub fn graph(&self) -> &KinGraph {
        &self.graph
    }

    pub fn generations(&self) -> &GenerationMap {
        &self.generations
    }

    pub fn relations(&self) -> Relations<'_> {
        self.gedcom.relations()
    }

    pub fn len(&self) -> usize {
        self.gedcom.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gedcom.individuals.is_empty()
    }

    /// Maps a GEDCOM id (`@I1@`) or a display id (`i1`) to the individual's GEDCOM id.
    pub fn resolve_id<'a>(&'a self, id: &str) -> Option<&'a str> {
        if let Some((key, _)) = self.gedcom.individuals.get_key_value(id) {
            return Some(key.as_str());
        }
        let gedcom_id = self.id_map.display_id_to_gedcom_id(id)?;
        self.gedcom
            .individuals
            .get_key_value(gedcom_id)
            .map(|(key, _)| key.as_str())
    }

    pub fn display_id(&self, gedcom_id: &str) -> String {
        gedcom_id_to_display_id(gedcom_id)
    }

    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.gedcom.individual(self.resolve_id(id)?)
    }

    pub fn generation(&self, id: &str) -> Option<u32> {
        self.generations.generation(self.resolve_id(id)?)
    }

    /// GEDCOM ids from `start` to `end`; either end may be given as a display id.
    pub fn find_path(&self, start: &str, end: &str) -> Vec<String> {
        let (Some(start), Some(end)) = (self.resolve_id(start), self.resolve_id(end)) else {
            return Vec::new();
        };
        find_path(&self.graph, start, end)
    }

    pub fn relationship_type(&self, from: &str, to: &str) -> RelationshipKind {
        let (Some(from), Some(to)) = (self.resolve_id(from), self.resolve_id(to)) else {
            return RelationshipKind::Unknown;
        };
        relationship_type(&self.graph, from, to)
    }

    pub fn labelled_path(&self, start: &str, end: &str) -> Vec<PathHop> {
        let (Some(start), Some(end)) = (self.resolve_id(start), self.resolve_id(end)) else {
            return Vec::new();
        };
        labelled_path(&self.graph, start, end)
    }
}

#[cfg(feature = "render")]
mod connectors {
    use super::FamilyTree;
    use gedtree_render::{
        ChildLink, ConnectorRequest, Obstacle, RoutedConnectors, SpousePair, route_connectors,
    };

    impl FamilyTree {
        /// Every spouse pair and parent link among `visible` (all individuals when `None`).
        pub fn connector_request(&self, visible: Option<&[&str]>) -> ConnectorRequest {
            let shown = |id: &str| visible.is_none_or(|ids| ids.iter().any(|v| *v == id));
            let rel = self.relations();
            let mut request = ConnectorRequest::default();

            for id in self.gedcom.individuals.keys().filter(|id| shown(id.as_str())) {
                for link in rel.spouses(id) {
                    if shown(link.spouse_id.as_str()) {
                        request.spouses.push(SpousePair {
                            a: id.clone(),
                            b: link.spouse_id,
                            status: link.status,
                        });
                    }
                }

                let parents: Vec<String> = rel
                    .parents(id)
                    .into_iter()
                    .filter(|p| shown(*p))
                    .map(str::to_string)
                    .collect();
                if !parents.is_empty() {
                    request.children.push(ChildLink {
                        child: id.clone(),
                        parents,
                    });
                }
            }
            request
        }

        /// Routes connectors between the supplied tiles, whose ids are GEDCOM ids.
        pub fn route_connectors(&self, obstacles: &[Obstacle]) -> crate::Result<RoutedConnectors> {
            let visible: Vec<&str> = obstacles.iter().map(|o| o.id.as_str()).collect();
            let request = self.connector_request(Some(visible.as_slice()));
            Ok(route_connectors(obstacles, &request, self.route_options)?)
        }
    }
}
