//! Delimited text encoding and decoding for asset records.
//!
//! One record is one line of `;`-separated fields in a fixed order; dates
//! are `DD/MM/YYYY`. Free-text fields are written as-is: a delimiter inside
//! them shifts the field layout and the line fails to decode on the next
//! load. These are pure transformation functions with no side effects.

use super::error::ParseError;
use super::types::{AssetKind, AssetRecord, Date, clipped};

/// Field delimiter within a record line.
pub const DELIMITER: char = ';';

/// Header written as the first line of a persisted file. For human
/// inspection only; the loader skips it without parsing.
pub const FILE_HEADER: &str =
    "ID;Nome;Fabricante;Tipo;DataCompra;Valor;VidaUtil;UltimaManutencao;Obsoleto";

/// Encode a date as zero-padded `DD/MM/YYYY`.
pub fn encode_date(date: Date) -> String {
    format!("{date}")
}

/// Decode a `DD/MM/YYYY` date.
///
/// Recognizes exactly three `/`-separated integers; no semantic validation
/// happens here, so month 13 decodes successfully.
pub fn decode_date(text: &str) -> Result<Date, ParseError> {
    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(ParseError::Date(text.to_string()));
    };
    let day: u8 = day.parse().map_err(|_| ParseError::Date(text.to_string()))?;
    let month: u8 = month.parse().map_err(|_| ParseError::Date(text.to_string()))?;
    let year: u16 = year.parse().map_err(|_| ParseError::Date(text.to_string()))?;
    Ok(Date { year, month, day })
}

/// Encode one record as a single delimited line.
pub fn encode_record(record: &AssetRecord) -> String {
    format!(
        "{};{};{};{};{};{:.2};{};{};{}",
        record.id,
        record.name,
        record.manufacturer,
        record.kind.as_token(),
        encode_date(record.purchase_date),
        record.purchase_value,
        record.useful_life_years,
        encode_date(record.last_maintenance_date),
        u8::from(record.is_obsolete),
    )
}

/// Decode one delimited line into a record.
///
/// The line must split into exactly 9 fields. Numeric and date fields fail
/// with [`ParseError`]; an unrecognized kind token decodes leniently to
/// [`AssetKind::Other`], and the obsolete flag is true only for `1`.
pub fn decode_record(line: &str) -> Result<AssetRecord, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [id, name, manufacturer, kind, purchase, value, life, maintenance, obsolete] =
        fields.as_slice()
    else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let id: u32 = id.parse().map_err(|_| ParseError::Integer {
        field: "id",
        value: (*id).to_string(),
    })?;
    let purchase_value: f64 = value.parse().map_err(|_| ParseError::Number {
        field: "value",
        value: (*value).to_string(),
    })?;
    let useful_life_years: u32 = life.parse().map_err(|_| ParseError::Integer {
        field: "useful life",
        value: (*life).to_string(),
    })?;

    Ok(AssetRecord {
        id,
        name: clipped(name),
        manufacturer: clipped(manufacturer),
        kind: AssetKind::from_token(kind),
        purchase_date: decode_date(purchase)?,
        purchase_value,
        useful_life_years,
        last_maintenance_date: decode_date(maintenance)?,
        is_obsolete: *obsolete == "1",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        AssetRecord {
            id: 7,
            name: "ProLiant DL380".to_string(),
            manufacturer: "HPE".to_string(),
            kind: AssetKind::Server,
            purchase_date: Date::new(15, 3, 2021),
            purchase_value: 3000.0,
            useful_life_years: 5,
            last_maintenance_date: Date::new(10, 1, 2023),
            is_obsolete: false,
        }
    }

    #[test]
    fn test_date_roundtrip_zero_padded() {
        let date = Date::new(5, 3, 2021);
        let text = encode_date(date);
        assert_eq!(text, "05/03/2021");
        assert_eq!(decode_date(&text).unwrap(), date);
    }

    #[test]
    fn test_date_accepts_unpadded_input() {
        assert_eq!(decode_date("5/3/2021").unwrap(), Date::new(5, 3, 2021));
    }

    #[test]
    fn test_date_without_semantic_validation() {
        assert_eq!(decode_date("31/13/2021").unwrap(), Date::new(31, 13, 2021));
    }

    #[test]
    fn test_date_rejects_other_shapes() {
        for bad in ["05-03-2021", "05/03", "05/03/2021/1", "", "dd/mm/yyyy", "05/03/"] {
            assert!(decode_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let original = record();
        let line = encode_record(&original);
        assert_eq!(
            line,
            "7;ProLiant DL380;HPE;SERVIDOR;15/03/2021;3000.00;5;10/01/2023;0"
        );
        assert_eq!(decode_record(&line).unwrap(), original);
    }

    #[test]
    fn test_obsolete_flag_encoding() {
        let mut original = record();
        original.is_obsolete = true;
        let line = encode_record(&original);
        assert!(line.ends_with(";1"));
        assert!(decode_record(&line).unwrap().is_obsolete);

        // Anything other than the literal "1" reads as false.
        let lenient = format!("{};true", line.strip_suffix(";1").unwrap());
        assert!(!decode_record(&lenient).unwrap().is_obsolete);
    }

    #[test]
    fn test_record_requires_nine_fields() {
        assert_eq!(
            decode_record("1;only;five;fields;here"),
            Err(ParseError::FieldCount(5))
        );
        let ten = format!("{};extra", encode_record(&record()));
        assert_eq!(decode_record(&ten), Err(ParseError::FieldCount(10)));
    }

    #[test]
    fn test_record_unknown_kind_decodes_to_other() {
        let line = "1;a;b;MAINFRAME;01/01/2020;10.00;2;01/01/2020;0";
        assert_eq!(decode_record(line).unwrap().kind, AssetKind::Other);
    }

    #[test]
    fn test_record_rejects_bad_numeric_fields() {
        let bad_id = "x;a;b;OUTRO;01/01/2020;10.00;2;01/01/2020;0";
        assert!(matches!(
            decode_record(bad_id),
            Err(ParseError::Integer { field: "id", .. })
        ));

        let bad_value = "1;a;b;OUTRO;01/01/2020;cheap;2;01/01/2020;0";
        assert!(matches!(
            decode_record(bad_value),
            Err(ParseError::Number { field: "value", .. })
        ));

        let bad_life = "1;a;b;OUTRO;01/01/2020;10.00;forever;01/01/2020;0";
        assert!(matches!(
            decode_record(bad_life),
            Err(ParseError::Integer { field: "useful life", .. })
        ));
    }

    #[test]
    fn test_record_rejects_bad_dates() {
        let bad = "1;a;b;OUTRO;2020-01-01;10.00;2;01/01/2020;0";
        assert!(matches!(decode_record(bad), Err(ParseError::Date(_))));
    }

    #[test]
    fn test_delimiter_in_free_text_corrupts_the_line() {
        // Known format limitation: the delimiter is never escaped, so a name
        // containing it shifts the layout and the line no longer decodes.
        let mut original = record();
        original.name = "rack 4; shelf 2".to_string();
        let line = encode_record(&original);
        assert_eq!(decode_record(&line), Err(ParseError::FieldCount(10)));
    }

    #[test]
    fn test_decode_clips_overlong_free_text() {
        let long = "n".repeat(150);
        let line = format!("1;{long};b;OUTRO;01/01/2020;10.00;2;01/01/2020;0");
        assert_eq!(decode_record(&line).unwrap().name.chars().count(), 99);
    }
}
