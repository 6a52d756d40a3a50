/// Validates the provided API key against the key configured at startup.
///
/// Returns `Ok(())` if the key is valid, an `unauthenticated` status if it is missing or wrong,
/// and an `internal` status if no key is configured.
#[allow(clippy::result_large_err)]
pub fn validate_api_key(
    provided_key: Option<&str>,
    expected_key: Option<&str>,
) -> Result<(), tonic::Status> {
    let Some(expected_key) = expected_key else {
        return Err(tonic::Status::internal("API_KEY not set"));
    };

    match provided_key {
        Some(key) if key == expected_key => Ok(()),
        Some(_) => Err(tonic::Status::unauthenticated("Invalid API key")),
        None => Err(tonic::Status::unauthenticated("Missing x-api-key header")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_configured_key_rejects_everything() {
        let missing = validate_api_key(None, None).unwrap_err();
        assert_eq!(missing.code(), tonic::Code::Internal);
        assert_eq!(missing.message(), "API_KEY not set");

        let provided = validate_api_key(Some("anything"), None).unwrap_err();
        assert_eq!(provided.code(), tonic::Code::Internal);
    }

    #[test]
    fn test_configured_key_must_match() {
        assert!(validate_api_key(Some("secret"), Some("secret")).is_ok());

        let wrong = validate_api_key(Some("guess"), Some("secret")).unwrap_err();
        assert_eq!(wrong.code(), tonic::Code::Unauthenticated);

        let missing = validate_api_key(None, Some("secret")).unwrap_err();
        assert_eq!(missing.code(), tonic::Code::Unauthenticated);
        assert_eq!(missing.message(), "Missing x-api-key header");
    }
}
