use crate::FamilyTree;
use gedtree_core::gedcom_id_to_display_id;
use serde::Serialize;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub display_id: String,
    pub display_name: String,
    pub full_name: String,
    pub years: String,
}

impl FamilyTree {
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.search_with_limit(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Case-insensitive substring match over `display name, full name, years`, in generation
    /// order. A blank query matches nothing.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.generations()
            .ordered_ids()
            .filter_map(|id| self.gedcom().individual(id))
            .filter_map(|person| {
                let display_name = person.display_name();
                let full_name = person.full_name();
                let years = person.years();
                let haystack = format!("{display_name} {full_name} {years}").to_lowercase();
                haystack.contains(&needle).then(|| SearchHit {
                    id: person.id.clone(),
                    display_id: gedcom_id_to_display_id(&person.id),
                    display_name,
                    full_name,
                    years,
                })
            })
            .take(limit)
            .collect()
    }
}
