//! FIRE trade file envelope and loading.

use std::path::{Path, PathBuf};

use pricer_saccr::{Instrument, MarketParams, TradeRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{LoaderError, Result};

/// Extension appended to bare data set names.
pub const TRADE_FILE_EXTENSION: &str = "json";

/// A labelled collection of trade records: `{ "name": ..., "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeFile {
    /// Label of the data set.
    pub name: String,
    /// Trade records in file order.
    pub data: Vec<TradeRecord>,
}

impl TradeFile {
    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the file holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Builds one instrument per record, in file order.
    ///
    /// # Errors
    ///
    /// Stops at the first record that fails to convert.
    pub fn instruments(&self, market: &MarketParams) -> Result<Vec<Instrument>> {
        let instruments = self
            .data
            .iter()
            .map(|record| Instrument::from_record(record, market))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(
            name = %self.name,
            instruments = instruments.len(),
            "Instruments built"
        );
        Ok(instruments)
    }
}

/// A loaded data set: its label plus the constructed instruments.
#[derive(Clone, Debug)]
pub struct Book {
    /// Label of the data set.
    pub name: String,
    /// Instruments in file order.
    pub instruments: Vec<Instrument>,
}

/// Envelope with records left undecoded, so field errors can name the trade.
#[derive(Deserialize)]
struct RawTradeFile {
    name: String,
    data: Vec<Value>,
}

/// Record fields holding text, in schema order after `id`.
const TEXT_FIELDS: [&str; 10] = [
    "type",
    "asset_class",
    "date",
    "start_date",
    "end_date",
    "trade_date",
    "currency_code",
    "value_date",
    "payment_type",
    "receive_type",
];

/// Record fields holding amounts.
const AMOUNT_FIELDS: [&str; 2] = ["mtm_dirty", "notional_amount"];

/// Parses a trade file from JSON text.
///
/// `origin` names the input in error messages.
///
/// # Errors
///
/// - `LoaderError::Json` if the text is not a valid envelope
/// - `LoaderError::InvalidRecord` if a record lacks a field or holds a
///   value of the wrong type, naming the trade and the field
/// - `LoaderError::EmptyRecords` if `data` is empty
pub fn parse_trade_file(text: &str, origin: &str) -> Result<TradeFile> {
    let json_error = |source| LoaderError::Json {
        origin: origin.to_string(),
        source,
    };

    let raw: RawTradeFile = serde_json::from_str(text).map_err(json_error)?;
    if raw.data.is_empty() {
        return Err(LoaderError::EmptyRecords {
            origin: origin.to_string(),
        });
    }

    let data = raw
        .data
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if let Some(fields) = value.as_object() {
                check_record(index, fields)?;
            }
            serde_json::from_value(value).map_err(json_error)
        })
        .collect::<Result<Vec<TradeRecord>>>()?;

    Ok(TradeFile {
        name: raw.name,
        data,
    })
}

/// Checks presence and JSON type of every record field.
fn check_record(index: usize, fields: &Map<String, Value>) -> Result<()> {
    let trade = match fields.get("id") {
        Some(Value::String(id)) => id.clone(),
        other => {
            return Err(LoaderError::InvalidRecord {
                trade: format!("data[{}]", index),
                field: "id",
                reason: mismatch("a string", other),
            })
        }
    };

    for field in TEXT_FIELDS {
        match fields.get(field) {
            Some(Value::String(_)) => {}
            other => {
                return Err(LoaderError::InvalidRecord {
                    trade,
                    field,
                    reason: mismatch("a string", other),
                })
            }
        }
    }
    for field in AMOUNT_FIELDS {
        match fields.get(field) {
            Some(Value::Number(_)) => {}
            other => {
                return Err(LoaderError::InvalidRecord {
                    trade,
                    field,
                    reason: mismatch("a number", other),
                })
            }
        }
    }
    Ok(())
}

fn mismatch(expected: &str, found: Option<&Value>) -> String {
    let found = match found {
        None => return "missing".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => format!("boolean {}", b),
        Some(Value::Number(n)) => format!("number {}", n),
        Some(Value::String(s)) => format!("string {:?}", s),
        Some(Value::Array(_)) => "an array".to_string(),
        Some(Value::Object(_)) => "an object".to_string(),
    };
    format!("expected {}, got {}", expected, found)
}

/// Reads and parses a trade file from disk.
///
/// # Errors
///
/// `LoaderError::Io` if the file cannot be read, otherwise as for
/// [`parse_trade_file`].
pub fn load_trade_file(path: &Path) -> Result<TradeFile> {
    let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_trade_file(&text, &path.display().to_string())?;

    info!(
        path = %path.display(),
        name = %file.name,
        records = file.len(),
        "Trade file loaded"
    );
    Ok(file)
}

/// Reads a trade file and builds its instruments.
///
/// # Errors
///
/// As for [`load_trade_file`] and [`TradeFile::instruments`].
pub fn load_instruments(path: &Path, market: &MarketParams) -> Result<Book> {
    let file = load_trade_file(path)?;
    let instruments = file.instruments(market)?;
    Ok(Book {
        name: file.name,
        instruments,
    })
}

/// Resolves a `--file` argument.
///
/// A bare data set name such as `data` maps to `<data_dir>/data.json`;
/// anything with an extension or a directory component is used as given.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use adapter_loader::resolve_trade_path;
///
/// let dir = Path::new("data");
/// assert_eq!(resolve_trade_path("data2", dir), Path::new("data/data2.json"));
/// assert_eq!(resolve_trade_path("trades/book.json", dir), Path::new("trades/book.json"));
/// ```
pub fn resolve_trade_path(file: &str, data_dir: &Path) -> PathBuf {
    let candidate = Path::new(file);
    let is_bare = candidate.extension().is_none() && candidate.parent() == Some(Path::new(""));
    if is_bare {
        data_dir.join(format!("{}.{}", file, TRADE_FILE_EXTENSION))
    } else {
        candidate.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_saccr::SaCcrError;
    use std::io::Write;

    const ONE_RECORD: &str = r#"{
        "name": "Derivatives Data",
        "data": [{
            "id": "T001", "type": "vanilla_swap", "asset_class": "ir",
            "date": "2024-01-01T00:00:00Z", "start_date": "2024-01-01T00:00:00Z",
            "end_date": "2029-01-01T00:00:00Z", "trade_date": "2023-12-28T00:00:00Z",
            "currency_code": "USD", "value_date": "2024-01-01T00:00:00Z",
            "mtm_dirty": 100.0, "notional_amount": 1000000,
            "payment_type": "floating", "receive_type": "fixed"
        }]
    }"#;

    #[test]
    fn test_parse_trade_file() {
        let file = parse_trade_file(ONE_RECORD, "inline").unwrap();
        assert_eq!(file.name, "Derivatives Data");
        assert_eq!(file.len(), 1);
        assert_eq!(file.data[0].contract_type, "vanilla_swap");
        assert_eq!(file.data[0].notional_amount, 1_000_000.0);
    }

    #[test]
    fn test_empty_data_is_rejected() {
        let result = parse_trade_file(r#"{"name": "x", "data": []}"#, "inline");
        assert!(matches!(result, Err(LoaderError::EmptyRecords { .. })));
    }

    #[test]
    fn test_malformed_envelope_is_json_error() {
        let result = parse_trade_file(r#"{"name": "x", "data": {}}"#, "inline");
        match result {
            Err(LoaderError::Json { origin, .. }) => assert_eq!(origin, "inline"),
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_names_trade_and_field() {
        let result = parse_trade_file(r#"{"name": "x", "data": [{"id": "A"}]}"#, "inline");
        match result {
            Err(LoaderError::InvalidRecord {
                trade,
                field,
                reason,
            }) => {
                assert_eq!(trade, "A");
                assert_eq!(field, "type");
                assert_eq!(reason, "missing");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_id_names_record_index() {
        let text = ONE_RECORD.replace(r#""id": "T001", "#, "");
        match parse_trade_file(&text, "inline") {
            Err(LoaderError::InvalidRecord { trade, field, .. }) => {
                assert_eq!(trade, "data[0]");
                assert_eq!(field, "id");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_mtm_names_field() {
        let text = ONE_RECORD.replace(r#""mtm_dirty": 100.0"#, r#""mtm_dirty": "abc""#);
        let err = parse_trade_file(&text, "inline").unwrap_err();

        assert!(matches!(
            err,
            LoaderError::InvalidRecord {
                field: "mtm_dirty",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid field 'mtm_dirty' on trade T001: expected a number, got string \"abc\""
        );
    }

    #[test]
    fn test_non_numeric_notional_names_field() {
        let text = ONE_RECORD.replace(
            r#""notional_amount": 1000000"#,
            r#""notional_amount": "1,000,000""#,
        );
        let err = parse_trade_file(&text, "inline").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("notional_amount"));
        assert!(message.contains("T001"));
        assert!(matches!(
            err,
            LoaderError::InvalidRecord {
                field: "notional_amount",
                ..
            }
        ));
    }

    #[test]
    fn test_null_leg_type_names_field() {
        let text = ONE_RECORD.replace(r#""receive_type": "fixed""#, r#""receive_type": null"#);
        match parse_trade_file(&text, "inline") {
            Err(LoaderError::InvalidRecord { field, reason, .. }) => {
                assert_eq!(field, "receive_type");
                assert_eq!(reason, "expected a string, got null");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_checked_fields_cover_record_schema() {
        let file = parse_trade_file(ONE_RECORD, "inline").unwrap();
        let value = serde_json::to_value(&file.data[0]).unwrap();
        let mut schema: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut checked: Vec<&str> = std::iter::once("id")
            .chain(TEXT_FIELDS)
            .chain(AMOUNT_FIELDS)
            .collect();
        schema.sort_unstable();
        checked.sort_unstable();
        assert_eq!(schema, checked);
    }

    #[test]
    fn test_invalid_market_surfaces_as_invalid_params() {
        let file = parse_trade_file(ONE_RECORD, "inline").unwrap();
        let market = MarketParams {
            fixed_rate: 0.0,
            ..MarketParams::default()
        };

        match file.instruments(&market) {
            Err(LoaderError::SaCcr(SaCcrError::InvalidParams(errors))) => {
                assert!(errors[0].contains("market.fixed_rate"));
            }
            other => panic!("Expected InvalidParams, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_surfaces_as_invalid_field() {
        let text = ONE_RECORD.replace("2029-01-01T00:00:00Z", "01/01/2029");
        let file = parse_trade_file(&text, "inline").unwrap();

        match file.instruments(&MarketParams::default()) {
            Err(LoaderError::SaCcr(SaCcrError::InvalidField {
                trade_id, field, ..
            })) => {
                assert_eq!(trade_id, "T001");
                assert_eq!(field, "end_date");
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_load_instruments_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(ONE_RECORD.as_bytes()).unwrap();

        let book = load_instruments(tmp.path(), &MarketParams::default()).unwrap();
        assert_eq!(book.name, "Derivatives Data");
        assert_eq!(book.instruments.len(), 1);
        assert_eq!(book.instruments[0].delta(), -1.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_trade_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoaderError::Io { .. })));
    }

    #[test]
    fn test_resolve_trade_path() {
        let dir = Path::new("/srv/saccr");
        assert_eq!(
            resolve_trade_path("data", dir),
            PathBuf::from("/srv/saccr/data.json")
        );
        assert_eq!(
            resolve_trade_path("./data.json", dir),
            PathBuf::from("./data.json")
        );
        assert_eq!(
            resolve_trade_path("/tmp/book", dir),
            PathBuf::from("/tmp/book")
        );
    }
}
