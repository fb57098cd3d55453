mod common;

use std::fs::{self, File};

use account_ledger::process_operations;
use common::{build_csv, process_csv_string, receipt_lines};
use rust_decimal_macros::dec;

#[test]
fn test_receipts_for_each_operation() {
    let csv = build_csv(&[("credit", "500"), ("debit", "200"), ("debit", "2000")]);

    let (ledger, output) = process_csv_string(&csv, dec!(1000)).unwrap();
    println!("Receipts:\n{}", output);

    assert!(output.starts_with("type,amount,success,balance,detail\n"));

    let lines = receipt_lines(&output);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "CREDIT,500,true,1500.00,Amount credited. New balance: 1500.00"
    );
    assert_eq!(
        lines[1],
        "DEBIT,200,true,1300.00,Amount debited. New balance: 1300.00"
    );
    assert_eq!(
        lines[2],
        "DEBIT,2000,false,1300.00,Insufficient funds for this debit"
    );

    assert_eq!(ledger.balance(), dec!(1300.00));
    assert_eq!(ledger.transaction_history().len(), 2);
}

#[test]
fn test_invalid_and_negative_amounts_reported() {
    let csv = build_csv(&[("credit", "abc"), ("debit", "-5"), ("credit", "")]);

    let (ledger, output) = process_csv_string(&csv, dec!(1000)).unwrap();

    let lines = receipt_lines(&output);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "CREDIT,abc,false,1000.00,Invalid amount: must be a number"
    );
    assert_eq!(
        lines[1],
        "DEBIT,-5,false,1000.00,Debit amount cannot be negative"
    );
    assert!(lines[2].starts_with("CREDIT,,false,1000.00,"));

    assert!(ledger.transaction_history().is_empty());
}

#[test]
fn test_unknown_operation_rows_skipped() {
    let csv = "type,amount\ncredit,10\ntransfer,5\n  debit , 2.50 \n";

    let (ledger, output) = process_csv_string(csv, dec!(0)).unwrap();

    assert_eq!(receipt_lines(&output).len(), 2);
    assert_eq!(ledger.balance(), dec!(7.50));
}

#[test]
fn test_uppercase_types_accepted() {
    let csv = build_csv(&[("CREDIT", "1"), ("DEBIT", "1")]);

    let (ledger, _) = process_csv_string(&csv, dec!(1000)).unwrap();

    assert_eq!(ledger.transaction_history().len(), 2);
    assert_eq!(ledger.balance(), dec!(1000.00));
}

#[test]
fn test_empty_input() {
    let (ledger, output) = process_csv_string("type,amount\n", dec!(42)).unwrap();

    assert!(receipt_lines(&output).is_empty());
    assert_eq!(ledger.balance(), dec!(42.00));
}

#[test]
fn test_replay_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("operations.csv");
    fs::write(
        &path,
        build_csv(&[("credit", "0.1"), ("credit", "0.2"), ("debit", "0.15")]),
    )
    .unwrap();

    let mut output = Vec::new();
    let ledger = process_operations(File::open(&path).unwrap(), &mut output, dec!(1000)).unwrap();

    assert_eq!(ledger.balance(), dec!(1000.15));
    let output = String::from_utf8(output).unwrap();
    assert!(output.trim_end().ends_with("1000.15,Amount debited. New balance: 1000.15"));
}
