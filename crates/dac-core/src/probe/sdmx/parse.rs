//! Validate an SDMX-JSON data response body.

use serde_json::Value;

use super::ProbeError;

/// Accepts a body that parses as SDMX-JSON and carries at least one data set
/// with a non-empty `series` or `observations` member.
pub(crate) fn validate_data(body: &[u8]) -> Result<(), ProbeError> {
    let v: Value =
        serde_json::from_slice(body).map_err(|e| ProbeError::Malformed(e.to_string()))?;

    let data_sets = v
        .get("dataSets")
        // SDMX-JSON 2.0 nests the payload under "data".
        .or_else(|| v.pointer("/data/dataSets"))
        .and_then(Value::as_array)
        .ok_or_else(|| ProbeError::Malformed("missing dataSets".to_string()))?;

    let has_data = data_sets.iter().any(|set| {
        let series = set.get("series").and_then(Value::as_object);
        let observations = set.get("observations").and_then(Value::as_object);
        series.is_some_and(|s| !s.is_empty()) || observations.is_some_and(|o| !o.is_empty())
    });

    if has_data {
        Ok(())
    } else {
        Err(ProbeError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_SERIES: &[u8] = br#"{
        "dataSets": [{"series": {"0:0:0": {"observations": {"0": [1.0837]}}}}],
        "structure": {}
    }"#;

    #[test]
    fn accepts_series_data() {
        assert!(validate_data(WITH_SERIES).is_ok());
    }

    #[test]
    fn accepts_flat_observations() {
        let body = br#"{"data": {"dataSets": [{"observations": {"0:0": [42]}}]}}"#;
        assert!(validate_data(body).is_ok());
    }

    #[test]
    fn empty_data_sets_is_empty_error() {
        let body = br#"{"dataSets": []}"#;
        assert!(matches!(validate_data(body), Err(ProbeError::Empty)));
        let body = br#"{"dataSets": [{"series": {}}]}"#;
        assert!(matches!(validate_data(body), Err(ProbeError::Empty)));
    }

    #[test]
    fn missing_data_sets_is_malformed() {
        let body = br#"{"structure": {}}"#;
        assert!(matches!(validate_data(body), Err(ProbeError::Malformed(_))));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            validate_data(b"<html>maintenance</html>"),
            Err(ProbeError::Malformed(_))
        ));
    }
}
