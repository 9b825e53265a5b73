//! Integration tests to validate the bundled sample trade files.

use std::path::{Path, PathBuf};

use adapter_loader::{load_instruments, load_trade_file, resolve_trade_path};
use approx::assert_relative_eq;
use pricer_saccr::{MarketParams, SaCcr, SupervisoryParams};

/// Get the sample data directory path
fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn test_sample_files_are_labelled_and_non_trivial() {
    for name in ["data", "data1", "data2"] {
        let path = resolve_trade_path(name, &data_dir());
        let file = load_trade_file(&path).unwrap();

        assert_eq!(file.name, "Derivatives Data", "label of {}", name);
        assert!(file.len() > 1, "{} should hold more than one record", name);
    }
}

#[test]
fn test_sample_records_are_interest_rate_trades() {
    for name in ["data", "data1", "data2"] {
        let file = load_trade_file(&resolve_trade_path(name, &data_dir())).unwrap();
        for record in &file.data {
            assert_eq!(record.asset_class, "ir");
            assert!(["vanilla_swap", "swaption"].contains(&record.contract_type.as_str()));
        }
    }
}

#[test]
fn test_every_sample_instrument_builds() {
    for name in ["data", "data1", "data2"] {
        let path = resolve_trade_path(name, &data_dir());
        let book = load_instruments(&path, &MarketParams::default()).unwrap();
        assert!(book.instruments.iter().all(|i| i.delta().is_finite()));
    }
}

#[test]
fn test_data2_pipeline() {
    let path = resolve_trade_path("data2", &data_dir());
    let book = load_instruments(&path, &MarketParams::default()).unwrap();

    let ead = SaCcr::new(book.instruments, SupervisoryParams::default())
        .unwrap()
        .get_ead()
        .unwrap();

    assert_relative_eq!(ead, 30_385.930_836_744_606, max_relative = 1e-12);
}
