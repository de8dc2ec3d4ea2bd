//! Resolving raw dataset ids against the extracted enum tables.

use crate::enums::{EnumKind, IdKind, IdTables};
use crate::models::RawEntity;
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A dataset id confirmed to exist in its Rust enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedRef<K> {
    value: u32,
    variant: String,
    kind: PhantomData<K>,
}

impl<K: IdKind> ResolvedRef<K> {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }
}

impl<K: IdKind> fmt::Display for ResolvedRef<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", K::KIND.enum_name(), self.variant)
    }
}

/// A non-fatal problem found while building a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The id's value has no variant in its enum
    Unresolved {
        kind: EnumKind,
        name: String,
        value: u32,
    },
    /// A unit's whole ability set was skipped because the unit itself is unknown
    UnitDropped { name: String, value: u32 },
    /// None of a unit's abilities resolved
    EmptyAfterFiltering { name: String, value: u32 },
    /// An ability is researched for more than one upgrade
    Conflict {
        ability: String,
        kept: String,
        discarded: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unresolved { kind, name, value } => {
                write!(f, "{} {}({}) not in Rust enums", kind.label(), name, value)
            }
            Diagnostic::UnitDropped { name, value } => {
                write!(f, "Skipped unit {}({}): not in Rust enums", name, value)
            }
            Diagnostic::EmptyAfterFiltering { name, value } => {
                write!(f, "{}({}) abilities missing", name, value)
            }
            Diagnostic::Conflict {
                ability,
                kept,
                discarded,
            } => write!(
                f,
                "{} maps to both {} and {}, keeping {}",
                ability, kept, discarded, kept
            ),
        }
    }
}

/// Diagnostics in the order they were found. An unresolved id is reported once.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    unresolved: BTreeSet<(EnumKind, u32)>,
}

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if let Diagnostic::Unresolved { kind, value, .. } = &diagnostic {
            if !self.unresolved.insert((*kind, *value)) {
                return;
            }
        }
        tracing::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct ids that failed to resolve
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pure lookup of a raw id in the table for its kind.
pub fn lookup<K: IdKind>(
    tables: &IdTables,
    raw: &RawEntity<K>,
) -> Result<ResolvedRef<K>, Diagnostic> {
    match tables.table(K::KIND).get(raw.value) {
        Some(variant) => Ok(ResolvedRef {
            value: raw.value,
            variant: variant.to_string(),
            kind: PhantomData,
        }),
        None => Err(Diagnostic::Unresolved {
            kind: K::KIND,
            name: raw.name.clone(),
            value: raw.value,
        }),
    }
}

/// Resolves ids for one table build and collects what failed.
pub struct Resolver<'a> {
    tables: &'a IdTables,
    diagnostics: Diagnostics,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a IdTables) -> Self {
        Resolver {
            tables,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Resolve `raw`, recording a diagnostic and returning `None` on a miss.
    pub fn resolve<K: IdKind>(&mut self, raw: &RawEntity<K>) -> Option<ResolvedRef<K>> {
        match lookup(self.tables, raw) {
            Ok(resolved) => Some(resolved),
            Err(diagnostic) => {
                self.diagnostics.push(diagnostic);
                None
            }
        }
    }

    pub fn note(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// What to do when one ability is researched for two different upgrades.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later upgrade in traversal order replaces the earlier one
    #[default]
    LastWins,
    /// First upgrade seen is kept
    FirstWins,
    /// Abort the run
    Reject,
}

impl DuplicatePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            DuplicatePolicy::LastWins => "last-wins",
            DuplicatePolicy::FirstWins => "first-wins",
            DuplicatePolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-wins" => Ok(DuplicatePolicy::LastWins),
            "first-wins" => Ok(DuplicatePolicy::FirstWins),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!(
                "unknown duplicate policy `{}` (expected last-wins, first-wins or reject)",
                other
            )),
        }
    }
}
