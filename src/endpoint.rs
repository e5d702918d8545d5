//! Endpoint path templates.
//!
//! Every API operation maps to a path template relative to the base endpoint
//! URL. Templates carry `:name` placeholders that are filled by plain
//! find-and-replace in [`render`]; there is no escaping and placeholders
//! without a matching value are left in the path as-is.

/// Logical API operation and its path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `auth`
    Login,
    /// `service/dns/resellers/:reseller/zone_tpl`
    ZoneTemplate,
    /// `service/dns/resellers/:reseller/users/:login`
    UserResource,
    /// `service/dns/domains`
    DomainList,
    /// `service/dns/domains/:domain`
    Domain,
    /// `service/dns/domains/:domain/users`
    DomainUserList,
    /// `service/dns/domains/:domain/zone`
    DomainZone,
    /// `service/dns/domains/:domain/zone/txt`
    DomainZoneText,
    /// `service/dns/domains/:domain/zone/history`
    DomainZoneHistory,
    /// `service/dns/domains/:domain/zone/records`
    DomainZoneRecords,
    /// `service/dns/domains/:domain/zone/records_by_subdomain/:subdomain`
    DomainZoneRecordsBySubdomain,
    /// `service/dns/domains/:domain/zone/records/:record`
    DomainZoneRecord,
    /// `service/dns/domains/:domain/zone/default`
    DomainZoneDefault,
    /// `service/dns/ns`
    NsList,
    /// `service/dns/domains/:domain/fullinfo`
    DomainInfo,
    /// `resellers`
    ResellerList,
}

impl Endpoint {
    /// Every endpoint, in table order.
    pub const ALL: [Endpoint; 16] = [
        Endpoint::Login,
        Endpoint::ZoneTemplate,
        Endpoint::UserResource,
        Endpoint::DomainList,
        Endpoint::Domain,
        Endpoint::DomainUserList,
        Endpoint::DomainZone,
        Endpoint::DomainZoneText,
        Endpoint::DomainZoneHistory,
        Endpoint::DomainZoneRecords,
        Endpoint::DomainZoneRecordsBySubdomain,
        Endpoint::DomainZoneRecord,
        Endpoint::DomainZoneDefault,
        Endpoint::NsList,
        Endpoint::DomainInfo,
        Endpoint::ResellerList,
    ];

    /// The raw path template.
    pub const fn template(self) -> &'static str {
        match self {
            Endpoint::Login => "auth",
            Endpoint::ZoneTemplate => "service/dns/resellers/:reseller/zone_tpl",
            Endpoint::UserResource => "service/dns/resellers/:reseller/users/:login",
            Endpoint::DomainList => "service/dns/domains",
            Endpoint::Domain => "service/dns/domains/:domain",
            Endpoint::DomainUserList => "service/dns/domains/:domain/users",
            Endpoint::DomainZone => "service/dns/domains/:domain/zone",
            Endpoint::DomainZoneText => "service/dns/domains/:domain/zone/txt",
            Endpoint::DomainZoneHistory => "service/dns/domains/:domain/zone/history",
            Endpoint::DomainZoneRecords => "service/dns/domains/:domain/zone/records",
            Endpoint::DomainZoneRecordsBySubdomain => {
                "service/dns/domains/:domain/zone/records_by_subdomain/:subdomain"
            }
            Endpoint::DomainZoneRecord => "service/dns/domains/:domain/zone/records/:record",
            Endpoint::DomainZoneDefault => "service/dns/domains/:domain/zone/default",
            Endpoint::NsList => "service/dns/ns",
            Endpoint::DomainInfo => "service/dns/domains/:domain/fullinfo",
            Endpoint::ResellerList => "resellers",
        }
    }

    /// Render this endpoint's template with the given placeholder values.
    pub fn path(self, params: &[(&str, &str)]) -> String {
        render(self.template(), params)
    }
}

/// Replace each `placeholder` token in `template` with its value, in order.
///
/// ```
/// use dns_hosting_api::endpoint::render;
///
/// let path = render(
///     "service/dns/domains/:domain/zone/records/:record",
///     &[(":domain", "mfo.org.ua"), (":record", "42")],
/// );
/// assert_eq!(path, "service/dns/domains/mfo.org.ua/zone/records/42");
/// ```
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_owned(), |path, (placeholder, value)| {
            path.replace(placeholder, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_record_path() {
        let path = Endpoint::DomainZoneRecord.path(&[(":domain", "mfo.org.ua"), (":record", "42")]);
        assert_eq!(path, "service/dns/domains/mfo.org.ua/zone/records/42");
    }

    #[test]
    fn unmatched_placeholder_is_left_verbatim() {
        let path = Endpoint::UserResource.path(&[(":reseller", "r1")]);
        assert_eq!(path, "service/dns/resellers/r1/users/:login");
    }

    #[test]
    fn values_are_not_escaped() {
        let path = Endpoint::DomainZoneRecordsBySubdomain
            .path(&[(":domain", "a b.ua"), (":subdomain", "www/x")]);
        assert_eq!(
            path,
            "service/dns/domains/a b.ua/zone/records_by_subdomain/www/x"
        );
    }

    #[test]
    fn templates_without_placeholders_pass_through() {
        assert_eq!(Endpoint::Login.path(&[(":domain", "x")]), "auth");
        assert_eq!(Endpoint::ResellerList.path(&[]), "resellers");
    }

    #[test]
    fn every_template_is_relative() {
        for endpoint in Endpoint::ALL {
            assert!(!endpoint.template().starts_with('/'), "{endpoint:?}");
        }
    }
}
