use crate::api::models::RateTable;
use crate::error::ConversionError;
use crate::utils::validation::normalize_currency_code;

/// `amount * rate` for `to_currency`, unrounded. Codes are matched
/// case-insensitively.
///
/// `from_currency` is the base the table was fetched for; it only appears in
/// the error.
pub fn convert(
    amount: f64,
    rates: &RateTable,
    from_currency: &str,
    to_currency: &str,
) -> Result<f64, ConversionError> {
    let to_currency = normalize_currency_code(to_currency);
    let rate = rates
        .get(&to_currency)
        .ok_or_else(|| ConversionError::Unconvertible {
            from: normalize_currency_code(from_currency),
            to: to_currency.clone(),
        })?;

    Ok(amount * rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> RateTable {
        entries
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn test_convert_multiplies_by_rate() {
        let rates = table(&[("EUR", 0.9)]);
        let result = convert(100.0, &rates, "USD", "EUR").expect("conversion should succeed");
        assert_eq!(result, 100.0 * 0.9);
    }

    #[test]
    fn test_convert_is_not_rounded() {
        let rates = table(&[("JPY", 151.237)]);
        let result = convert(0.1, &rates, "USD", "JPY").expect("conversion should succeed");
        assert_eq!(result, 0.1 * 151.237);
    }

    #[test]
    fn test_convert_lowercase_target() {
        let rates = table(&[("EUR", 0.9)]);
        let result = convert(10.0, &rates, "usd", "eur").expect("conversion should succeed");
        assert_eq!(result, 10.0 * 0.9);
    }

    #[test]
    fn test_convert_missing_currency_names_upper_cased_codes() {
        let rates = table(&[("EUR", 0.9)]);
        let result = convert(1.0, &rates, "usd", "xyz");
        assert!(matches!(
            result,
            Err(ConversionError::Unconvertible { from, to }) if from == "USD" && to == "XYZ"
        ));
    }

    #[test]
    fn test_convert_missing_currency() {
        let rates = RateTable::new();
        let result = convert(5.0, &rates, "USD", "EUR");
        match result {
            Err(ConversionError::Unconvertible { from, to }) => {
                assert_eq!(from, "USD");
                assert_eq!(to, "EUR");
            }
            other => panic!("Expected Unconvertible, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_zero_amount() {
        let rates = table(&[("GBP", 0.79)]);
        assert_eq!(convert(0.0, &rates, "USD", "GBP").expect("conversion"), 0.0);
    }
}
