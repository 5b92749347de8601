use std::fmt;

/// How the guarded operation reached the integration: a machine API call or
/// an interactive storefront action.
///
/// API callers map a denial to an HTTP 403 response
/// ([`Denial::http_status`](crate::Denial::http_status)); storefront callers
/// surface the message to the end user. The distinction is a thin
/// classification over the request's route name and path, kept outside the
/// evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestKind {
    Api,
    #[default]
    Storefront,
}

impl RequestKind {
    /// Classify a request from its route name and path.
    ///
    /// A request is `Api` when the route name is `rest`, `soap`, or
    /// `graphql`, or when the path starts with `/rest/`, `/soap/`, or
    /// `/graphql`. Everything else is `Storefront`.
    #[must_use]
    pub fn classify(route_name: Option<&str>, path: &str) -> Self {
        let api_route = matches!(route_name, Some("rest" | "soap" | "graphql"));
        let api_path = path.starts_with("/rest/")
            || path.starts_with("/soap/")
            || path.starts_with("/graphql");
        if api_route || api_path {
            Self::Api
        } else {
            Self::Storefront
        }
    }

    /// Stable snake_case name, used as the `request_type` field of audit
    /// events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Storefront => "storefront",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
