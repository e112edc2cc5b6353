use crate::FamilyTree;
use gedtree_core::{Sex, SpouseLink, date, gedcom_id_to_display_id};
use gedtree_layout::RelationshipKind;
use serde::Serialize;

/// Everything a tile needs to render one individual.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: String,
    pub display_id: String,
    pub display_name: String,
    pub full_name: String,
    pub years: String,
    pub sex: Sex,
    pub generation: Option<u32>,
    pub spouses: Vec<SpouseLink>,
    pub parents: Vec<String>,
    pub children: Vec<String>,
}

/// One breadcrumb of a connection path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub id: String,
    pub initials: String,
    pub full_name: String,
    /// How the next step relates to this one; `None` on the last step.
    pub next: Option<RelationshipKind>,
}

impl FamilyTree {
    pub fn summary(&self, id: &str) -> Option<PersonSummary> {
        let gedcom_id = self.resolve_id(id)?;
        let person = self.gedcom().individual(gedcom_id)?;
        let rel = self.relations();

        Some(PersonSummary {
            id: gedcom_id.to_string(),
            display_id: gedcom_id_to_display_id(gedcom_id),
            display_name: person.display_name(),
            full_name: person.full_name(),
            years: person.years(),
            sex: person.sex,
            generation: self.generation(gedcom_id),
            spouses: rel.spouses(gedcom_id),
            parents: rel.parents(gedcom_id).into_iter().map(str::to_string).collect(),
            children: rel.children(gedcom_id).into_iter().map(str::to_string).collect(),
        })
    }

    /// Summaries generation by generation, left to right.
    pub fn summaries(&self) -> Vec<PersonSummary> {
        self.generations()
            .ordered_ids()
            .filter_map(|id| self.summary(id))
            .collect()
    }

    /// Breadcrumbs for the shortest connection between two individuals.
    pub fn connection_path(&self, start: &str, end: &str) -> Vec<PathStep> {
        let path = self.find_path(start, end);
        let mut steps = Vec::with_capacity(path.len());
        for (i, id) in path.iter().enumerate() {
            let Some(person) = self.gedcom().individual(id) else {
                continue;
            };
            let mut full_name = person.full_name();
            if full_name.is_empty() {
                full_name = person.display_name();
            }
            steps.push(PathStep {
                id: id.clone(),
                initials: date::initials(&full_name),
                full_name,
                next: path
                    .get(i + 1)
                    .map(|next| gedtree_layout::relationship_type(self.graph(), id, next)),
            });
        }
        steps
    }
}
