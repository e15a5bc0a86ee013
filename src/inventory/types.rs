//! Data types for the inventory module.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Free-text fields are persisted into fixed-width slots; anything longer is
/// cut at this limit, not rejected.
pub(crate) const TEXT_CAP: usize = 99;

pub(crate) fn clipped(text: &str) -> String {
    text.chars().take(TEXT_CAP).collect()
}

/// A calendar date as a plain integer triple.
///
/// There is no timezone, time of day, or semantic validation: the core
/// compares and formats whatever triple it is given. Range checks belong to
/// the input boundary. Field order gives the derived ordering its
/// (year, month, day) lexicographic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { year, month, day }
    }

    /// Whole years elapsed from `self` to `later`, anniversary-adjusted:
    /// the year difference drops by one until the month/day of `self` has
    /// been reached within `later`'s year. Negative when `later` precedes
    /// `self`.
    pub fn whole_years_until(self, later: Date) -> i32 {
        let mut years = i32::from(later.year) - i32::from(self.year);
        if (later.month, later.day) < (self.month, self.day) {
            years -= 1;
        }
        years
    }

    /// Whole calendar months elapsed from `self` to `later`, decremented by
    /// one while `later`'s day-of-month has not yet reached `self`'s.
    pub fn whole_months_until(self, later: Date) -> i32 {
        let mut months = (i32::from(later.year) - i32::from(self.year)) * 12
            + (i32::from(later.month) - i32::from(self.month));
        if later.day < self.day {
            months -= 1;
        }
        months
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::codec::decode_date(s)
    }
}

/// Category of a hardware asset.
///
/// The wire tokens are the persisted-format spellings; anything else on disk
/// decodes to [`AssetKind::Other`], so the textual mapping is lossy in one
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Computer,
    Printer,
    Server,
    Router,
    Switch,
    Other,
}

impl AssetKind {
    /// Token used in the persisted file format.
    pub fn as_token(self) -> &'static str {
        match self {
            AssetKind::Computer => "COMPUTADOR",
            AssetKind::Printer => "IMPRESSORA",
            AssetKind::Server => "SERVIDOR",
            AssetKind::Router => "ROTEADOR",
            AssetKind::Switch => "SWITCH",
            AssetKind::Other => "OUTRO",
        }
    }

    /// Decode a persisted token. Unknown tokens map to `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "COMPUTADOR" => AssetKind::Computer,
            "IMPRESSORA" => AssetKind::Printer,
            "SERVIDOR" => AssetKind::Server,
            "ROTEADOR" => AssetKind::Router,
            "SWITCH" => AssetKind::Switch,
            _ => AssetKind::Other,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// One hardware asset entry.
///
/// `id` is assigned by the store, is unique within it, and never changes or
/// gets reused. `is_obsolete` is a cached value: it is only meaningful right
/// after [`Inventory::recompute_obsolescence`](super::Inventory::recompute_obsolescence)
/// ran against a reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub id: u32,
    pub name: String,
    pub manufacturer: String,
    pub kind: AssetKind,
    pub purchase_date: Date,
    pub purchase_value: f64,
    pub useful_life_years: u32,
    pub last_maintenance_date: Date,
    pub is_obsolete: bool,
}

impl fmt::Display for AssetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} ({}) | {} | purchased {} | maintained {} | value {:.2} | life {} years | {}",
            self.id,
            self.name,
            self.manufacturer,
            self.kind,
            self.purchase_date,
            self.last_maintenance_date,
            self.purchase_value,
            self.useful_life_years,
            if self.is_obsolete { "OBSOLETE" } else { "active" },
        )
    }
}

/// Input for registering a new asset. The store assigns the id and derives
/// the maintenance and obsolescence fields.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub name: String,
    pub manufacturer: String,
    pub kind: AssetKind,
    pub purchase_date: Date,
    pub purchase_value: f64,
    pub useful_life_years: u32,
}
