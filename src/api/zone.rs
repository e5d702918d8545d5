//! Domain zone and record endpoints.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::Value;

use crate::client::DnsHostingClient;
use crate::endpoint::Endpoint;
use crate::error::{DnsHostingError, Result};

impl DnsHostingClient {
    /// Zone of a domain.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone`
    pub async fn domain_zone(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainZone, &[(":domain", domain)]).await
    }

    /// Replace the zone of a domain with `records`.
    ///
    /// `records` is serialised as-is into the request body.
    ///
    /// **Endpoint:** `PUT service/dns/domains/:domain/zone`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use dns_hosting_api::DnsHostingClient;
    /// # use serde_json::json;
    /// # #[tokio::main]
    /// # async fn main() -> dns_hosting_api::Result<()> {
    /// # let mut client = DnsHostingClient::new("https://dns.example.net/api/v1/")?;
    /// let records = json!({
    ///     "records": [{"host": "www", "type": "A", "value": "192.0.2.10", "ttl": 3600}]
    /// });
    /// client.domain_zone_update("example.ua", &records).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn domain_zone_update<B: Serialize + ?Sized>(
        &mut self,
        domain: &str,
        records: &B,
    ) -> Result<Value> {
        self.put(Endpoint::DomainZone, &[(":domain", domain)], records)
            .await
    }

    /// Zone of a domain in text (zone file) form.
    ///
    /// The API returns the text base64-encoded; it is decoded here. Failures
    /// are returned unchanged, without a decode attempt.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/txt`
    pub async fn domain_zone_as_text(&mut self, domain: &str) -> Result<String> {
        let payload = self
            .get(Endpoint::DomainZoneText, &[(":domain", domain)])
            .await?;
        decode_zone_text(&payload)
    }

    /// All records of a domain's zone.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/records`
    pub async fn domain_zone_records(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainZoneRecords, &[(":domain", domain)])
            .await
    }

    /// One zone record by ID.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/records/:record`
    pub async fn domain_zone_record(&mut self, domain: &str, record_id: &str) -> Result<Value> {
        self.get(
            Endpoint::DomainZoneRecord,
            &[(":domain", domain), (":record", record_id)],
        )
        .await
    }

    /// Zone records of one subdomain.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/records_by_subdomain/:subdomain`
    pub async fn domain_zone_records_by_subdomain(
        &mut self,
        domain: &str,
        subdomain: &str,
    ) -> Result<Value> {
        self.get(
            Endpoint::DomainZoneRecordsBySubdomain,
            &[(":domain", domain), (":subdomain", subdomain)],
        )
        .await
    }

    /// Default zone of a domain.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/default`
    pub async fn domain_zone_default(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainZoneDefault, &[(":domain", domain)])
            .await
    }

    /// Change history of a domain's zone.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/zone/history`
    pub async fn domain_zone_history(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainZoneHistory, &[(":domain", domain)])
            .await
    }
}

/// Standard alphabet, padding optional, trailing bits ignored.
const ZONE_TEXT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode the base64 string payload of the zone text endpoint.
///
/// Whitespace anywhere in the payload (line-wrapped output) is skipped.
fn decode_zone_text(payload: &Value) -> Result<String> {
    let encoded = payload.as_str().ok_or_else(|| {
        DnsHostingError::UnexpectedPayload(format!("expected a base64 string, got {payload}"))
    })?;
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = ZONE_TEXT_ENGINE.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_zone_text() {
        let text = decode_zone_text(&json!("JE9SSUdJTiBleGFtcGxlLnVhLgo=")).unwrap();
        assert_eq!(text, "$ORIGIN example.ua.\n");
    }

    #[test]
    fn decodes_unpadded_zone_text() {
        let text = decode_zone_text(&json!("JE9SSUdJTiBleGFtcGxlLnVhLgo")).unwrap();
        assert_eq!(text, "$ORIGIN example.ua.\n");
    }

    #[test]
    fn decodes_line_wrapped_zone_text() {
        let text = decode_zone_text(&json!("JE9SSUdJTiBl\r\neGFtcGxl\nLnVhLgo=\r\n")).unwrap();
        assert_eq!(text, "$ORIGIN example.ua.\n");
    }

    #[test]
    fn rejects_non_string_payload() {
        let err = decode_zone_text(&json!({"zone": "x"})).unwrap_err();
        assert!(matches!(err, DnsHostingError::UnexpectedPayload(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_zone_text(&json!("not base64!")).unwrap_err();
        assert!(matches!(err, DnsHostingError::Decode(_)));
    }
}
