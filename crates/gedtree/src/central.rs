use crate::FamilyTree;
use gedtree_core::SpouseLink;
use indexmap::IndexSet;
use serde::Serialize;

/// The focused view around one individual: parents above, spouses beside, children below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralView {
    pub central: String,
    pub parents: Vec<String>,
    pub spouses: Vec<SpouseLink>,
    pub children: Vec<String>,
}

impl CentralView {
    /// Parents, then the central person followed by spouses, then children. Empty rows are
    /// kept so callers can rely on three entries.
    pub fn rows(&self) -> [Vec<String>; 3] {
        let mut middle = vec![self.central.clone()];
        middle.extend(self.spouses.iter().map(|s| s.spouse_id.clone()));
        [self.parents.clone(), middle, self.children.clone()]
    }

    /// Every visible id once, row by row.
    pub fn visible_ids(&self) -> IndexSet<String> {
        self.rows().into_iter().flatten().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.central == id
            || self.parents.iter().any(|p| p == id)
            || self.children.iter().any(|c| c == id)
            || self.spouses.iter().any(|s| s.spouse_id == id)
    }
}

impl FamilyTree {
    /// Accepts a GEDCOM id or a display id.
    pub fn central_view(&self, id: &str) -> Option<CentralView> {
        let central = self.resolve_id(id)?;
        let rel = self.relations();

        let mut parents: Vec<String> = Vec::new();
        for p in rel.parents(central) {
            if !parents.iter().any(|q| q == p) {
                parents.push(p.to_string());
            }
        }

        Some(CentralView {
            central: central.to_string(),
            parents,
            spouses: rel.spouses(central),
            children: rel.children(central).into_iter().map(str::to_string).collect(),
        })
    }
}
