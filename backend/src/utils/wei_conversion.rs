use alloy::primitives::U256;
use anyhow::Result;
use crate::constants::{NATIVE_DECIMALS, WEI_PER_ETHER};

/// Parses a smallest-unit balance (decimal string) into a U256
pub fn parse_wei(raw: &str) -> Result<U256> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow::anyhow!("Empty wei amount"));
    }
    U256::from_str_radix(raw, 10)
        .map_err(|e| anyhow::anyhow!("Invalid wei amount '{}': {}", raw, e))
}

/// Converts a wei amount to an ether decimal string
///
/// The integer part comes from exact 256-bit division by 10^18. The
/// fractional part keeps every significant digit with trailing zeros trimmed,
/// always leaving at least one digit: "1.0", "0.5", "12.000000000000000001".
pub fn format_wei(raw: &str) -> Result<String> {
    let wei = parse_wei(raw)?;
    Ok(format_ether(wei))
}

pub fn format_ether(wei: U256) -> String {
    let divisor = U256::from(WEI_PER_ETHER);
    let whole = wei / divisor;
    let fraction = wei % divisor;

    let fraction_digits = format!("{:0>width$}", fraction.to_string(), width = NATIVE_DECIMALS as usize);
    let trimmed = fraction_digits.trim_end_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{}.{}", whole, trimmed)
}

/// Ether display string to f64, for threshold comparisons only
pub fn ether_to_f64(ether: &str) -> f64 {
    ether.parse::<f64>().unwrap_or(0.0)
}
