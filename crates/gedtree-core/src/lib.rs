#![forbid(unsafe_code)]

//! GEDCOM parser + genealogy data model (headless).
//!
//! Design goals:
//! - tolerant parsing: malformed lines and unknown tags are skipped, never fatal
//! - immutable records after parse, with relationships derived on demand
//! - deterministic, order-preserving outputs (record maps keep file order)

pub mod attachments;
pub mod config;
pub mod date;
pub mod error;
pub mod gedcom;
pub mod ids;
pub mod model;
pub mod relations;

pub use attachments::{Contacts, Document, Photo, PhysicalAddress, VirtualContact};
pub use config::{RootPolicyKind, TreeConfig};
pub use error::{Error, Result};
pub use gedcom::{GedcomLine, GedcomParser, ParserState, RecordBuilder, SubTag, parse, parse_line};
pub use ids::{IdMap, gedcom_id_to_display_id};
pub use model::{
    Address, CustomLink, Family, Gedcom, Individual, MediaObject, PersonName, Sex,
};
pub use relations::{Relations, SpouseLink, SpouseStatus};

impl Gedcom {
    pub fn relations(&self) -> Relations<'_> {
        Relations::new(self)
    }
}
