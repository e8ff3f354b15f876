use indexmap::IndexMap;
use serde::Deserialize;

/// Currency code to rate, in the order the provider sent them.
pub type RateTable = IndexMap<String, f64>;

// ExchangeRate-API v6 `latest` response
#[derive(Debug, Deserialize, Clone)]
pub struct LatestRatesResponse {
    pub result: Option<String>,
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
    pub base_code: Option<String>,
    pub time_last_update_utc: Option<String>,
    pub conversion_rates: Option<RateTable>,
}

impl LatestRatesResponse {
    pub fn is_error(&self) -> bool {
        self.result.as_deref() == Some("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_success_keeps_order() {
        let body = r#"{
            "result": "success",
            "base_code": "USD",
            "time_last_update_utc": "Fri, 27 Mar 2020 00:00:00 +0000",
            "conversion_rates": {"USD": 1, "GBP": 0.79, "EUR": 0.91}
        }"#;
        let response: LatestRatesResponse =
            serde_json::from_str(body).expect("Failed to parse response");

        assert!(!response.is_error());
        assert_eq!(response.base_code.as_deref(), Some("USD"));
        let rates = response.conversion_rates.expect("rates should be present");
        let codes: Vec<&str> = rates.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["USD", "GBP", "EUR"]);
        assert_eq!(rates["USD"], 1.0);
    }

    #[test]
    fn test_deserialize_error_body() {
        let body = r#"{"result": "error", "error-type": "invalid-key"}"#;
        let response: LatestRatesResponse =
            serde_json::from_str(body).expect("Failed to parse response");

        assert!(response.is_error());
        assert_eq!(response.error_type.as_deref(), Some("invalid-key"));
        assert!(response.conversion_rates.is_none());
    }
}
