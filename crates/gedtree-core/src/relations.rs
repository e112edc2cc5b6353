//! Spouse / parent / child resolution over parsed records.
//!
//! All lookups are read-only and tolerate dangling references: a family or individual that is
//! referenced but absent simply contributes nothing.

use crate::model::{Family, Gedcom, Individual};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpouseStatus {
    Married,
    Divorced,
    Widowed,
}

impl SpouseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
        }
    }

    /// A divorce date wins over a spouse's death date.
    pub fn derive(family: &Family, spouse: &Individual) -> Self {
        if family.is_divorced() {
            Self::Divorced
        } else if spouse.death().is_some() {
            Self::Widowed
        } else {
            Self::Married
        }
    }
}

impl std::fmt::Display for SpouseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseLink {
    pub spouse_id: String,
    pub family_id: String,
    pub marriage_date: Option<String>,
    pub divorce_date: Option<String>,
    pub status: SpouseStatus,
}

impl SpouseLink {
    pub fn marriage_year(&self) -> Option<i32> {
        self.marriage_date.as_deref().and_then(crate::date::year_number)
    }
}

/// Relationship queries over a borrowed [`Gedcom`].
#[derive(Debug, Clone, Copy)]
pub struct Relations<'a> {
    gedcom: &'a Gedcom,
}

impl<'a> Relations<'a> {
    pub fn new(gedcom: &'a Gedcom) -> Self {
        Self { gedcom }
    }

    pub fn gedcom(&self) -> &'a Gedcom {
        self.gedcom
    }

    pub fn contains(&self, id: &str) -> bool {
        self.gedcom.individuals.contains_key(id)
    }

    /// Spouses in `FAMS` order. Families whose partner cannot be resolved are skipped.
    pub fn spouses(&self, id: &str) -> Vec<SpouseLink> {
        let Some(individual) = self.gedcom.individual(id) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for fam_id in &individual.families_as_spouse {
            let Some(family) = self.gedcom.family(fam_id) else {
                continue;
            };
            let Some(spouse_id) = family.partner_of(id) else {
                continue;
            };
            let Some(spouse) = self.gedcom.individual(spouse_id) else {
                continue;
            };
            out.push(SpouseLink {
                spouse_id: spouse_id.to_string(),
                family_id: family.id.clone(),
                marriage_date: family.marriage().map(str::to_string),
                divorce_date: family.divorce().map(str::to_string),
                status: SpouseStatus::derive(family, spouse),
            });
        }
        out
    }

    /// Children across every spouse family, deduplicated, in first-seen order.
    pub fn children(&self, id: &str) -> Vec<&'a str> {
        let Some(individual) = self.gedcom.individual(id) else {
            return Vec::new();
        };

        let mut out: IndexSet<&'a str> = IndexSet::new();
        for fam_id in &individual.families_as_spouse {
            let Some(family) = self.gedcom.family(fam_id) else {
                continue;
            };
            for child in &family.children {
                if self.contains(child) {
                    out.insert(child.as_str());
                }
            }
        }
        out.into_iter().collect()
    }

    /// Husband then wife of every `FAMC` family. More than two entries are possible when an
    /// individual has several child-of families.
    pub fn parents(&self, id: &str) -> Vec<&'a str> {
        let Some(individual) = self.gedcom.individual(id) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for fam_id in &individual.families_as_child {
            let Some(family) = self.gedcom.family(fam_id) else {
                continue;
            };
            for parent in [family.husband(), family.wife()].into_iter().flatten() {
                if self.contains(parent) {
                    out.push(parent);
                }
            }
        }
        out
    }

    pub fn has_parents(&self, id: &str) -> bool {
        !self.parents(id).is_empty()
    }

    pub fn has_children(&self, id: &str) -> bool {
        !self.children(id).is_empty()
    }

    pub fn spouse_status(&self, id: &str, spouse_id: &str) -> Option<SpouseStatus> {
        self.spouses(id)
            .into_iter()
            .find(|s| s.spouse_id == spouse_id)
            .map(|s| s.status)
    }
}
