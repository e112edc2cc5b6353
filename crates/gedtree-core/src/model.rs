//! Parsed GEDCOM records.
//!
//! Records are created once by the parser and never mutated afterwards. Cross references are
//! kept in their raw GEDCOM form (`@I1@`); see [`crate::ids`] for the display form.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U")]
    Unknown,
}

impl Sex {
    pub fn from_gedcom(value: &str) -> Self {
        match value.trim() {
            "M" | "m" => Self::Male,
            "F" | "f" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonName {
    pub full: Option<String>,
    pub given: Option<String>,
    pub surname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub address: String,
    /// Free-form label from a nested `_TYPE` tag (empty when absent).
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomLink {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub id: String,
    pub name: PersonName,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub sex: Sex,
    pub families_as_spouse: Vec<String>,
    pub families_as_child: Vec<String>,
    pub objects: Vec<String>,
    pub notes: Vec<String>,
    pub addresses: Vec<Address>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub custom_links: Vec<CustomLink>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Birth date when present and non-empty.
    pub fn birth(&self) -> Option<&str> {
        non_empty(&self.birth_date)
    }

    /// Death date when present and non-empty.
    pub fn death(&self) -> Option<&str> {
        non_empty(&self.death_date)
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth().and_then(crate::date::year_number)
    }

    /// Short name for tiles: first word of the given name, else the full name.
    pub fn display_name(&self) -> String {
        if let Some(first) = self
            .name
            .given
            .as_deref()
            .and_then(|g| g.split_whitespace().next())
        {
            return first.to_string();
        }
        self.full_name()
    }

    /// NAME value with GEDCOM surname delimiters removed (`John /Smith/` -> `John Smith`).
    pub fn full_name(&self) -> String {
        let raw = self.name.full.as_deref().unwrap_or_default();
        raw.replace('/', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn years(&self) -> String {
        crate::date::format_years(self.birth(), self.death())
    }

    pub fn bio(&self) -> String {
        self.notes.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: String,
    pub husband: Option<String>,
    pub wife: Option<String>,
    /// Record order, which is not necessarily birth order.
    pub children: Vec<String>,
    pub marriage_date: Option<String>,
    pub divorce_date: Option<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn husband(&self) -> Option<&str> {
        non_empty(&self.husband)
    }

    pub fn wife(&self) -> Option<&str> {
        non_empty(&self.wife)
    }

    pub fn marriage(&self) -> Option<&str> {
        non_empty(&self.marriage_date)
    }

    pub fn divorce(&self) -> Option<&str> {
        non_empty(&self.divorce_date)
    }

    pub fn is_divorced(&self) -> bool {
        self.divorce().is_some()
    }

    /// The partner of `id` in this family: whichever of husband/wife is not `id`.
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        if self.husband() == Some(id) {
            self.wife()
        } else {
            self.husband()
        }
    }
}

/// A multimedia (`OBJE`) record: a photo, or a document when `doc_type` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaObject {
    pub id: String,
    pub file: String,
    pub form: String,
    pub title: String,
    /// Comma-separated list of the people shown.
    pub people: String,
    pub doc_type: String,
}

impl MediaObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_document(&self) -> bool {
        !self.doc_type.is_empty()
    }

    pub fn people_list(&self) -> Vec<String> {
        if self.people.is_empty() {
            return Vec::new();
        }
        self.people.split(',').map(str::to_string).collect()
    }
}

/// Result of a parse: all records keyed by their GEDCOM id, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Gedcom {
    pub individuals: IndexMap<String, Individual>,
    pub families: IndexMap<String, Family>,
    pub objects: IndexMap<String, MediaObject>,
}

impl Gedcom {
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    pub fn object(&self, id: &str) -> Option<&MediaObject> {
        self.objects.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty() && self.objects.is_empty()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
