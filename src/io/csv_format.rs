//! CSV format handling for operation records and transfer output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Transfer status output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input Format
//!
//! Columns: `op, caller, to, amount, transfer`
//!
//! - `create` rows carry `caller`, `to` and `amount`
//! - `approve` rows carry `caller` and `transfer` (the id being approved)
//!
//! The caller column is the verified identity supplied by the
//! authentication collaborator; the engine itself never authenticates.

use crate::types::{Amount, OperationRecord, OperationType, TransferId, TransferStatus};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: op, caller, to, amount,
/// transfer. The last three are optional because each operation type only
/// uses a subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub op: String,
    pub caller: String,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub transfer: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation string into an OperationType
/// - Parses the amount and transfer-id strings into integers (if present)
/// - Validates that create rows carry a recipient and an amount
/// - Validates that approve rows carry a transfer id
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(OperationRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let op_type = match csv_record.op.to_lowercase().as_str() {
        "create" => OperationType::Create,
        "approve" => OperationType::Approve,
        _ => {
            return Err(format!(
                "Invalid operation '{}' by caller '{}'",
                csv_record.op, csv_record.caller
            ))
        }
    };

    if csv_record.caller.trim().is_empty() {
        return Err(format!("{:?} operation requires a caller", op_type));
    }

    // Parse amount if present
    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            match amount_str.trim().parse::<Amount>() {
                Ok(amount) => Some(amount),
                Err(_) => {
                    return Err(format!(
                        "Invalid amount '{}' by caller '{}'",
                        amount_str, csv_record.caller
                    ))
                }
            }
        }
        _ => None,
    };

    // Parse transfer id if present
    let transfer = match csv_record.transfer {
        Some(id_str) if !id_str.trim().is_empty() => match id_str.trim().parse::<TransferId>() {
            Ok(id) => Some(id),
            Err(_) => {
                return Err(format!(
                    "Invalid transfer id '{}' by caller '{}'",
                    id_str, csv_record.caller
                ))
            }
        },
        _ => None,
    };

    let to = csv_record
        .to
        .map(|to| to.trim().to_string())
        .filter(|to| !to.is_empty());

    // Validate field presence based on operation type
    match op_type {
        OperationType::Create => {
            if to.is_none() {
                return Err(format!(
                    "create operation by '{}' requires a recipient",
                    csv_record.caller
                ));
            }
            if amount.is_none() {
                return Err(format!(
                    "create operation by '{}' requires an amount",
                    csv_record.caller
                ));
            }
        }
        OperationType::Approve => {
            if transfer.is_none() {
                return Err(format!(
                    "approve operation by '{}' requires a transfer id",
                    csv_record.caller
                ));
            }
            // A recipient or amount on an approve row is ignored rather
            // than rejected.
        }
    }

    Ok(OperationRecord {
        op_type,
        caller: csv_record.caller,
        to,
        amount,
        transfer,
    })
}

/// Write transfer statuses to CSV format
///
/// Writes transfers in CSV format with columns: id, amount, to, approvals,
/// sent. Transfers are already in creation order (ids dense from 0), which
/// keeps the output deterministic.
///
/// # Arguments
///
/// * `transfers` - Slice of transfer statuses to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_transfers_csv(
    transfers: &[TransferStatus],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Write header
    writer
        .write_record(["id", "amount", "to", "approvals", "sent"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Write each transfer
    for transfer in transfers {
        writer
            .write_record(&[
                transfer.id.to_string(),
                transfer.amount.to_string(),
                transfer.to.clone(),
                transfer.approvals.to_string(),
                transfer.sent.to_string(),
            ])
            .map_err(|e| format!("Failed to write transfer record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(
        op: &str,
        caller: &str,
        to: Option<&str>,
        amount: Option<&str>,
        transfer: Option<&str>,
    ) -> CsvRecord {
        CsvRecord {
            op: op.to_string(),
            caller: caller.to_string(),
            to: to.map(|s| s.to_string()),
            amount: amount.map(|s| s.to_string()),
            transfer: transfer.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case::lowercase("create")]
    #[case::uppercase("CREATE")] // case insensitive
    fn test_convert_valid_create(#[case] op: &str) {
        let result = convert_csv_record(record(op, "a1", Some("recipient"), Some("100"), None));
        assert!(result.is_ok());

        let converted = result.unwrap();
        assert_eq!(converted.op_type, OperationType::Create);
        assert_eq!(converted.caller, "a1");
        assert_eq!(converted.to, Some("recipient".to_string()));
        assert_eq!(converted.amount, Some(100));
        assert_eq!(converted.transfer, None);
    }

    #[test]
    fn test_convert_valid_approve() {
        let result = convert_csv_record(record("approve", "a0", None, None, Some("0")));
        assert!(result.is_ok());

        let converted = result.unwrap();
        assert_eq!(converted.op_type, OperationType::Approve);
        assert_eq!(converted.caller, "a0");
        assert_eq!(converted.transfer, Some(0));
    }

    #[test]
    fn test_convert_trims_whitespace() {
        let result =
            convert_csv_record(record("create", "a1", Some("  recipient  "), Some(" 100 "), None))
                .unwrap();
        assert_eq!(result.to, Some("recipient".to_string()));
        assert_eq!(result.amount, Some(100));
    }

    #[rstest]
    #[case::invalid_op("transfer", "a1", Some("r"), Some("100"), None, "Invalid operation")]
    #[case::create_missing_recipient("create", "a1", None, Some("100"), None, "requires a recipient")]
    #[case::create_empty_recipient("create", "a1", Some("  "), Some("100"), None, "requires a recipient")]
    #[case::create_missing_amount("create", "a1", Some("r"), None, None, "requires an amount")]
    #[case::create_empty_amount("create", "a1", Some("r"), Some(""), None, "requires an amount")]
    #[case::invalid_amount("create", "a1", Some("r"), Some("ten"), None, "Invalid amount")]
    #[case::negative_amount("create", "a1", Some("r"), Some("-5"), None, "Invalid amount")]
    #[case::approve_missing_id("approve", "a0", None, None, None, "requires a transfer id")]
    #[case::invalid_transfer_id("approve", "a0", None, None, Some("first"), "Invalid transfer id")]
    fn test_convert_errors(
        #[case] op: &str,
        #[case] caller: &str,
        #[case] to: Option<&str>,
        #[case] amount: Option<&str>,
        #[case] transfer: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let result = convert_csv_record(record(op, caller, to, amount, transfer));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[test]
    fn test_approve_ignores_amount_and_recipient() {
        let result =
            convert_csv_record(record("approve", "a0", Some("r"), Some("100"), Some("1"))).unwrap();
        assert_eq!(result.op_type, OperationType::Approve);
        assert_eq!(result.transfer, Some(1));
    }

    #[rstest]
    #[case::empty(
        vec![],
        "id,amount,to,approvals,sent\n"
    )]
    #[case::single_pending(
        vec![TransferStatus {
            id: 0,
            amount: 100,
            to: "recipient".to_string(),
            approvals: 0,
            sent: false,
        }],
        "id,amount,to,approvals,sent\n0,100,recipient,0,false\n"
    )]
    #[case::sent_and_pending(
        vec![
            TransferStatus {
                id: 0,
                amount: 100,
                to: "r0".to_string(),
                approvals: 2,
                sent: true,
            },
            TransferStatus {
                id: 1,
                amount: 250,
                to: "r1".to_string(),
                approvals: 1,
                sent: false,
            },
        ],
        "id,amount,to,approvals,sent\n0,100,r0,2,true\n1,250,r1,1,false\n"
    )]
    fn test_write_transfers_csv(#[case] transfers: Vec<TransferStatus>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_transfers_csv(&transfers, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
