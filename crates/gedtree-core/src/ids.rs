//! GEDCOM id <-> display id mapping.
//!
//! Display ids strip the `@` delimiters and lowercase the rest (`@I12@` -> `i12`). Lowercasing
//! loses information, so the inverse goes through an [`IdMap`] built from the parsed records.

use crate::model::Gedcom;
use indexmap::IndexMap;

pub fn gedcom_id_to_display_id(gedcom_id: &str) -> String {
    gedcom_id.replace('@', "").to_lowercase()
}

/// Display id -> original GEDCOM id, covering every individual, family and object record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    to_gedcom: IndexMap<String, String>,
}

impl IdMap {
    pub fn from_gedcom(gedcom: &Gedcom) -> Self {
        let ids = gedcom
            .individuals
            .keys()
            .chain(gedcom.families.keys())
            .chain(gedcom.objects.keys());

        let mut to_gedcom: IndexMap<String, String> = IndexMap::new();
        for id in ids {
            let shown = gedcom_id_to_display_id(id);
            match to_gedcom.get(&shown) {
                Some(existing) if existing != id => {
                    tracing::warn!(
                        display_id = %shown,
                        kept = %existing,
                        dropped = %id,
                        "display id collision; keeping the first record"
                    );
                }
                Some(_) => {}
                None => {
                    to_gedcom.insert(shown, id.clone());
                }
            }
        }
        Self { to_gedcom }
    }

    pub fn display_id_to_gedcom_id(&self, display_id: &str) -> Option<&str> {
        self.to_gedcom.get(display_id).map(String::as_str)
    }

    pub fn display_ids(&self) -> impl Iterator<Item = &str> {
        self.to_gedcom.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_gedcom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_gedcom.is_empty()
    }
}
