#![allow(dead_code)]

use account_ledger::ledger::Ledger;
use rust_decimal::Decimal;

/// Ledger opened at the given balance
pub fn ledger_with_balance(balance: Decimal) -> Ledger {
    Ledger::new(balance).expect("valid initial balance")
}

/// Run a CSV string through the replay and return the receipts
pub fn process_csv_string(
    csv_input: &str,
    initial_balance: Decimal,
) -> Result<(Ledger, String), Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    let ledger =
        account_ledger::process_operations(csv_input.as_bytes(), &mut output, initial_balance)?;
    Ok((ledger, String::from_utf8(output)?))
}

/// Build operations CSV from (type, amount) pairs
pub fn build_csv(operations: &[(&str, &str)]) -> String {
    let mut csv = String::from("type,amount\n");

    for (kind, amount) in operations {
        csv.push_str(&format!("{},{}\n", kind, amount));
    }

    csv
}

/// Receipt lines without the header
pub fn receipt_lines(output: &str) -> Vec<&str> {
    output.lines().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[("credit", "100"), ("debit", "50.25")]);

        assert!(csv.starts_with("type,amount\n"));
        assert!(csv.contains("credit,100\n"));
        assert!(csv.contains("debit,50.25\n"));
    }
}
