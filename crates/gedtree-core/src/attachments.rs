//! Photo, document and contact views over an individual's auxiliary records.

use crate::model::Gedcom;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub src: String,
    pub caption: String,
    pub people: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub src: String,
    pub caption: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicalAddress {
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualContact {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contacts {
    pub physical: Vec<PhysicalAddress>,
    #[serde(rename = "virtual")]
    pub virtual_contacts: Vec<VirtualContact>,
}

impl Gedcom {
    /// Attachments without a document type. Unknown object references are skipped.
    pub fn photos(&self, individual_id: &str) -> Vec<Photo> {
        let Some(individual) = self.individual(individual_id) else {
            return Vec::new();
        };
        individual
            .objects
            .iter()
            .filter_map(|obj_id| self.object(obj_id))
            .filter(|obj| !obj.is_document())
            .map(|obj| Photo {
                src: obj.file.clone(),
                caption: obj.title.clone(),
                people: obj.people_list(),
            })
            .collect()
    }

    pub fn documents(&self, individual_id: &str) -> Vec<Document> {
        let Some(individual) = self.individual(individual_id) else {
            return Vec::new();
        };
        individual
            .objects
            .iter()
            .filter_map(|obj_id| self.object(obj_id))
            .filter(|obj| obj.is_document())
            .map(|obj| Document {
                src: obj.file.clone(),
                caption: obj.title.clone(),
                kind: obj.doc_type.clone(),
            })
            .collect()
    }

    /// Addresses, then emails, phones and custom links.
    pub fn contacts(&self, individual_id: &str) -> Contacts {
        let Some(individual) = self.individual(individual_id) else {
            return Contacts::default();
        };

        let physical = individual
            .addresses
            .iter()
            .map(|a| PhysicalAddress {
                kind: or_default_label(&a.kind, "Address"),
                address: a.address.clone(),
            })
            .collect();

        let mut virtual_contacts = Vec::new();
        virtual_contacts.extend(individual.emails.iter().map(|e| VirtualContact {
            kind: "Email".to_string(),
            value: e.clone(),
        }));
        virtual_contacts.extend(individual.phones.iter().map(|p| VirtualContact {
            kind: "Phone".to_string(),
            value: p.clone(),
        }));
        virtual_contacts.extend(individual.custom_links.iter().map(|l| VirtualContact {
            kind: or_default_label(&l.kind, "Link"),
            value: l.value.clone(),
        }));

        Contacts {
            physical,
            virtual_contacts,
        }
    }

    /// All notes joined by a single space; empty for unknown individuals.
    pub fn bio(&self, individual_id: &str) -> String {
        self.individual(individual_id)
            .map(|i| i.bio())
            .unwrap_or_default()
    }
}

fn or_default_label(kind: &str, fallback: &str) -> String {
    if kind.is_empty() {
        fallback.to_string()
    } else {
        kind.to_string()
    }
}
