//! Line-oriented GEDCOM parser.
//!
//! Every non-empty line must look like `<level> [@xref@] <TAG> [value]`; anything else is skipped.
//! Parsing is a single forward pass over an explicit state: the record being built (level 0) and
//! the most recent level-1 tag, which gives level-2 tags such as `DATE` their meaning.

use crate::model::{Address, CustomLink, Family, Gedcom, Individual, MediaObject, Sex};
use regex::Regex;

fn line_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s+(@[^@]+@)?\s*(\S+)\s*(.*)$").expect("valid regex"))
}

/// One tokenized GEDCOM line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    pub level: u32,
    pub xref: Option<&'a str>,
    pub tag: &'a str,
    pub value: &'a str,
}

/// Tokenizes a single line. Returns `None` for blank or malformed lines.
pub fn parse_line(line: &str) -> Option<GedcomLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let caps = line_regex().captures(line)?;
    let level = caps.get(1)?.as_str().parse::<u32>().ok()?;
    Some(GedcomLine {
        level,
        xref: caps.get(2).map(|m| m.as_str()),
        tag: caps.get(3)?.as_str(),
        value: caps.get(4).map(|m| m.as_str()).unwrap_or_default(),
    })
}

/// Parses a whole GEDCOM document. Never fails; the worst case is an empty [`Gedcom`].
pub fn parse(text: &str) -> Gedcom {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parser = GedcomParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// The level-1 tag currently in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubTag {
    Name,
    Birth,
    Death,
    Marriage,
    Divorce,
    Address,
    Link,
    Other,
}

impl SubTag {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "NAME" => Self::Name,
            "BIRT" => Self::Birth,
            "DEAT" => Self::Death,
            "MARR" => Self::Marriage,
            "DIV" => Self::Divorce,
            "ADDR" => Self::Address,
            "_LINK" => Self::Link,
            _ => Self::Other,
        }
    }
}

/// The in-progress level-0 record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBuilder {
    Individual(Individual),
    Family(Family),
    Object(MediaObject),
}

impl RecordBuilder {
    fn start(tag: &str, id: &str) -> Option<Self> {
        match tag {
            "INDI" => Some(Self::Individual(Individual::new(id))),
            "FAM" => Some(Self::Family(Family::new(id))),
            "OBJE" => Some(Self::Object(MediaObject::new(id))),
            _ => None,
        }
    }

    fn apply_level1(&mut self, tag: &str, value: &str) -> bool {
        let value = value.to_string();
        match self {
            Self::Individual(indi) => match tag {
                "NAME" => indi.name.full = Some(value),
                "SEX" => indi.sex = Sex::from_gedcom(&value),
                "FAMS" => indi.families_as_spouse.push(value),
                "FAMC" => indi.families_as_child.push(value),
                "OBJE" => indi.objects.push(value),
                "NOTE" => indi.notes.push(value),
                "ADDR" => indi.addresses.push(Address {
                    address: value,
                    kind: String::new(),
                }),
                "PHON" => indi.phones.push(value),
                "EMAIL" => indi.emails.push(value),
                "_LINK" => indi.custom_links.push(CustomLink {
                    value,
                    kind: String::new(),
                }),
                _ => return false,
            },
            Self::Family(fam) => match tag {
                "HUSB" => fam.husband = Some(value),
                "WIFE" => fam.wife = Some(value),
                "CHIL" => fam.children.push(value),
                _ => return false,
            },
            Self::Object(obj) => match tag {
                "FILE" => obj.file = value,
                "FORM" => obj.form = value,
                "TITL" => obj.title = value,
                "_PEOPLE" => obj.people = value,
                "_DOCTYPE" => obj.doc_type = value,
                _ => return false,
            },
        }
        true
    }

    fn apply_level2(&mut self, sub: SubTag, tag: &str, value: &str) -> bool {
        match (self, tag) {
            (Self::Individual(indi), "GIVN") => indi.name.given = Some(value.to_string()),
            (Self::Individual(indi), "SURN") => indi.name.surname = Some(value.to_string()),
            (Self::Individual(indi), "DATE") => match sub {
                SubTag::Birth => indi.birth_date = Some(value.to_string()),
                SubTag::Death => indi.death_date = Some(value.to_string()),
                _ => return false,
            },
            (Self::Family(fam), "DATE") => match sub {
                SubTag::Marriage => fam.marriage_date = Some(value.to_string()),
                SubTag::Divorce => fam.divorce_date = Some(value.to_string()),
                _ => return false,
            },
            (Self::Individual(indi), "_TYPE") => {
                let slot = match sub {
                    SubTag::Address => indi.addresses.last_mut().map(|a| &mut a.kind),
                    SubTag::Link => indi.custom_links.last_mut().map(|l| &mut l.kind),
                    _ => None,
                };
                let Some(slot) = slot else {
                    return false;
                };
                *slot = value.to_string();
            }
            _ => return false,
        }
        true
    }
}

/// Parser state between lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParserState {
    /// Before the first record, or inside a level-0 record we do not keep (`HEAD`, `SOUR`, ...).
    #[default]
    Idle,
    InRecord {
        record: RecordBuilder,
        sub_tag: Option<SubTag>,
    },
}

/// Incremental parser; feed lines in order, then call [`GedcomParser::finish`].
#[derive(Debug, Default)]
pub struct GedcomParser {
    state: ParserState,
    out: Gedcom,
    skipped_lines: usize,
    ignored_tags: usize,
}

impl GedcomParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Lines that did not match the GEDCOM line shape.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn feed_line(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        let Some(line) = parse_line(raw) else {
            self.skipped_lines += 1;
            tracing::trace!(line = raw, "skipping malformed GEDCOM line");
            return;
        };

        if line.level == 0 {
            self.flush();
            self.state = Self::open_record(&line);
            return;
        }

        let ParserState::InRecord { record, sub_tag } = &mut self.state else {
            return;
        };
        let applied = match line.level {
            1 => {
                *sub_tag = Some(SubTag::from_tag(line.tag));
                record.apply_level1(line.tag, line.value)
            }
            2 => record.apply_level2(sub_tag.unwrap_or(SubTag::Other), line.tag, line.value),
            _ => false,
        };
        if !applied {
            self.ignored_tags += 1;
            tracing::trace!(level = line.level, tag = line.tag, "ignoring GEDCOM tag");
        }
    }

    fn open_record(line: &GedcomLine<'_>) -> ParserState {
        let Some(id) = line.xref else {
            if matches!(line.tag, "INDI" | "FAM" | "OBJE") {
                tracing::warn!(tag = line.tag, "dropping GEDCOM record without an xref id");
            }
            return ParserState::Idle;
        };
        match RecordBuilder::start(line.tag, id) {
            Some(record) => ParserState::InRecord {
                record,
                sub_tag: None,
            },
            None => ParserState::Idle,
        }
    }

    fn flush(&mut self) {
        let ParserState::InRecord { record, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        match record {
            RecordBuilder::Individual(indi) => {
                self.out.individuals.insert(indi.id.clone(), indi);
            }
            RecordBuilder::Family(fam) => {
                self.out.families.insert(fam.id.clone(), fam);
            }
            RecordBuilder::Object(obj) => {
                self.out.objects.insert(obj.id.clone(), obj);
            }
        }
    }

    pub fn finish(mut self) -> Gedcom {
        self.flush();
        tracing::debug!(
            individuals = self.out.individuals.len(),
            families = self.out.families.len(),
            objects = self.out.objects.len(),
            skipped_lines = self.skipped_lines,
            ignored_tags = self.ignored_tags,
            "parsed GEDCOM"
        );
        self.out
    }
}
