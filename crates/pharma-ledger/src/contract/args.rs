//! Positional string argument parsing for contract invocations.

use super::ContractError;

/// Check the argument count of an operation.
pub(super) fn expect_arity(
    operation: &str,
    args: &[String],
    expected: usize,
) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::InvalidArguments {
            operation: operation.to_string(),
            reason: format!("expected {} arguments, got {}", expected, args.len()),
        });
    }
    Ok(())
}

/// Argument at `index` parsed as `T`.
pub(super) fn parse_arg<T: std::str::FromStr>(
    operation: &str,
    args: &[String],
    index: usize,
) -> Result<T, ContractError>
where
    T::Err: std::fmt::Display,
{
    let raw = args.get(index).ok_or_else(|| ContractError::InvalidArguments {
        operation: operation.to_string(),
        reason: format!("missing argument at index {}", index),
    })?;

    raw.trim().parse().map_err(|e: T::Err| ContractError::InvalidArguments {
        operation: operation.to_string(),
        reason: format!("invalid argument at index {}: {}", index, e),
    })
}

/// Drug list given either as a JSON array of strings or comma-separated.
/// Blank entries are dropped.
pub(super) fn parse_drug_list(
    operation: &str,
    args: &[String],
    index: usize,
) -> Result<Vec<String>, ContractError> {
    let raw = args.get(index).map(|s| s.trim()).unwrap_or_default();

    if raw.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
            ContractError::InvalidArguments {
                operation: operation.to_string(),
                reason: format!("invalid drug list: {}", e),
            }
        });
    }

    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|drug| !drug.is_empty())
        .map(str::to_string)
        .collect())
}
