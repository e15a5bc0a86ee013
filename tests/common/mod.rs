//! Common test utilities and fixtures.

use hwinv::inventory::{AssetKind, AssetRecord, Date, NewAsset};

pub fn date(day: u8, month: u8, year: u16) -> Date {
    Date { year, month, day }
}

/// A well-formed register input with the given name.
pub fn new_asset(name: &str) -> NewAsset {
    NewAsset {
        name: name.to_string(),
        manufacturer: "Acme".to_string(),
        kind: AssetKind::Computer,
        purchase_date: date(1, 6, 2020),
        purchase_value: 1000.0,
        useful_life_years: 4,
    }
}

/// A fully populated record, shaped like the output of one registration.
pub fn sample_record(id: u32) -> AssetRecord {
    AssetRecord {
        id,
        name: format!("asset-{id}"),
        manufacturer: "Acme".to_string(),
        kind: AssetKind::Server,
        purchase_date: date(15, 3, 2021),
        purchase_value: 3000.0,
        useful_life_years: 5,
        last_maintenance_date: date(15, 3, 2021),
        is_obsolete: false,
    }
}
