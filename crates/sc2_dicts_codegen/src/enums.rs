//! Recovers `discriminant -> variant` tables from the id enum sources.
//!
//! Only the narrow shape used by the id files is understood: a declaration
//! `<vis> enum <Name> {` followed by one `Variant = 123,` per line. Anything
//! else inside the body (attributes, docs, derive noise) is skipped.

use crate::error::{CodegenError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The three id schemes the generator stitches together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumKind {
    Unit,
    Ability,
    Upgrade,
}

impl EnumKind {
    pub const ALL: [EnumKind; 3] = [EnumKind::Unit, EnumKind::Ability, EnumKind::Upgrade];

    /// Rust enum name, e.g. `AbilityId`
    pub const fn enum_name(self) -> &'static str {
        match self {
            EnumKind::Unit => "UnitTypeId",
            EnumKind::Ability => "AbilityId",
            EnumKind::Upgrade => "UpgradeId",
        }
    }

    /// File holding the enum inside an ids directory
    pub const fn file_name(self) -> &'static str {
        match self {
            EnumKind::Unit => "unit_typeid.rs",
            EnumKind::Ability => "ability_id.rs",
            EnumKind::Upgrade => "upgrade_id.rs",
        }
    }

    /// Label used in diagnostics
    pub const fn label(self) -> &'static str {
        match self {
            EnumKind::Unit => "Unit",
            EnumKind::Ability => "Ability",
            EnumKind::Upgrade => "Upgrade",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.enum_name())
    }
}

/// Type-level tag tying a raw dataset id to the table it resolves against.
pub trait IdKind {
    const KIND: EnumKind;
}

/// Marker for `UnitTypeId` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {}

/// Marker for `AbilityId` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {}

/// Marker for `UpgradeId` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Upgrade {}

impl IdKind for Unit {
    const KIND: EnumKind = EnumKind::Unit;
}

impl IdKind for Ability {
    const KIND: EnumKind = EnumKind::Ability;
}

impl IdKind for Upgrade {
    const KIND: EnumKind = EnumKind::Upgrade;
}

/// Discriminant -> variant name for one enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumerationTable {
    enum_name: String,
    variants: BTreeMap<u32, String>,
}

impl EnumerationTable {
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// Variant name for a discriminant
    #[inline]
    pub fn get(&self, value: u32) -> Option<&str> {
        self.variants.get(&value).map(String::as_str)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.variants.contains_key(&value)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Entries in ascending discriminant order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.variants.iter().map(|(v, n)| (*v, n.as_str()))
    }
}

/// Extract the variant table of `enum_name` from Rust source text.
pub fn extract(source: &str, enum_name: &str) -> Result<EnumerationTable> {
    let body = find_body(source, enum_name)?;

    let mut variants = BTreeMap::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with("//")
            || line.starts_with("/*")
            || line.starts_with('*')
            || line.starts_with("#[")
            || line.starts_with("#![")
        {
            continue;
        }
        if let Some((value, name)) = parse_variant(line) {
            if let Some(previous) = variants.insert(value, name.to_string()) {
                tracing::debug!(
                    enum_name,
                    value,
                    previous = %previous,
                    current = name,
                    "duplicate discriminant, keeping the later variant"
                );
            }
        }
    }

    Ok(EnumerationTable {
        enum_name: enum_name.to_string(),
        variants,
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Slice between the declaration's `{` and its matching `}`.
fn find_body<'a>(source: &'a str, enum_name: &str) -> Result<&'a str> {
    let mut cursor = 0;
    while let Some(found) = source[cursor..].find("enum") {
        let keyword = cursor + found;
        cursor = keyword + "enum".len();

        let preceded_by_ident = source[..keyword]
            .chars()
            .next_back()
            .is_some_and(is_ident_char);
        if preceded_by_ident {
            continue;
        }

        let rest = &source[cursor..];
        let after_keyword = rest.trim_start();
        if after_keyword.len() == rest.len() {
            continue;
        }
        let Some(after_name) = after_keyword.strip_prefix(enum_name) else {
            continue;
        };
        if after_name.starts_with(is_ident_char) {
            continue;
        }
        let after_name = after_name.trim_start();
        if !after_name.starts_with('{') {
            continue;
        }

        let open = source.len() - after_name.len();
        return match closing_brace(source, open) {
            Some(close) => Ok(&source[open + 1..close]),
            None => Err(CodegenError::UnterminatedEnum {
                enum_name: enum_name.to_string(),
            }),
        };
    }

    Err(CodegenError::SchemaNotFound {
        enum_name: enum_name.to_string(),
    })
}

/// Index of the `}` closing the `{` at `open`, tracking nesting.
fn closing_brace(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in source.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse `Ident = 123,` (anything after the comma is ignored).
fn parse_variant(line: &str) -> Option<(u32, &str)> {
    let ident_len = line.find(|c: char| !is_ident_char(c)).unwrap_or(line.len());
    let (ident, rest) = line.split_at(ident_len);
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, rest) = rest.split_at(digits_len);
    if !rest.trim_start().starts_with(',') {
        return None;
    }

    let value = digits.parse().ok()?;
    Some((value, ident))
}

/// The unit, ability and upgrade tables of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdTables {
    units: EnumerationTable,
    abilities: EnumerationTable,
    upgrades: EnumerationTable,
}

impl IdTables {
    pub fn new(
        units: EnumerationTable,
        abilities: EnumerationTable,
        upgrades: EnumerationTable,
    ) -> Self {
        IdTables {
            units,
            abilities,
            upgrades,
        }
    }

    /// Extract all three tables from their source texts.
    pub fn from_sources(unit_src: &str, ability_src: &str, upgrade_src: &str) -> Result<Self> {
        Ok(IdTables {
            units: extract(unit_src, EnumKind::Unit.enum_name())?,
            abilities: extract(ability_src, EnumKind::Ability.enum_name())?,
            upgrades: extract(upgrade_src, EnumKind::Upgrade.enum_name())?,
        })
    }

    /// Read `unit_typeid.rs`, `ability_id.rs` and `upgrade_id.rs` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |kind: EnumKind| {
            let path = dir.join(kind.file_name());
            fs::read_to_string(&path).map_err(|e| CodegenError::io(path, e))
        };
        Self::from_sources(
            &read(EnumKind::Unit)?,
            &read(EnumKind::Ability)?,
            &read(EnumKind::Upgrade)?,
        )
    }

    /// Paths `from_dir` reads, for rerun triggers.
    pub fn source_paths(dir: &Path) -> Vec<PathBuf> {
        EnumKind::ALL
            .iter()
            .map(|kind| dir.join(kind.file_name()))
            .collect()
    }

    pub fn table(&self, kind: EnumKind) -> &EnumerationTable {
        match kind {
            EnumKind::Unit => &self.units,
            EnumKind::Ability => &self.abilities,
            EnumKind::Upgrade => &self.upgrades,
        }
    }
}
