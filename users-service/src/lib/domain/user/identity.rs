use crate::user::models::UserId;
use crate::user::models::UserRole;

/// Identity of the caller for the current request.
///
/// Populated by the inbound authentication layer from a verified
/// token's claims and passed explicitly into every flow that makes an
/// authorization decision. Lifetime is bounded to one request; nothing
/// here is persisted.
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity {
    user_id: Option<String>,
    role: Option<String>,
}

impl RequestIdentity {
    /// Identity of an unauthenticated caller: no claims at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Identity extracted from verified token claims.
    pub fn authenticated(user_id: String, role: String) -> Self {
        Self {
            user_id: Some(user_id),
            role: Some(role),
        }
    }

    /// Whether the caller is an administrator.
    ///
    /// True iff the role claim case-insensitively equals
    /// "Administrator". No claims, no role claim, or any other role
    /// all answer false.
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|role| role.eq_ignore_ascii_case(UserRole::Administrator.as_str()))
            .unwrap_or(false)
    }

    /// The caller's id, parsed from the identity claim.
    ///
    /// A missing claim or one that fails to parse yields `None` rather
    /// than an error.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
            .as_deref()
            .and_then(|raw| UserId::from_string(raw).ok())
    }

    /// The raw role claim, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// Opaque per-request identifier for traceability.
///
/// Adopted from the inbound `X-Correlation-Id` header or freshly
/// generated, echoed on the response, and attached to request state.
/// Not a security primitive.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_anonymous_has_no_claims() {
        let identity = RequestIdentity::anonymous();

        assert!(!identity.is_admin());
        assert!(identity.user_id().is_none());
        assert!(identity.role().is_none());
    }

    #[test]
    fn test_admin_check_is_case_insensitive() {
        let admin =
            RequestIdentity::authenticated(Uuid::new_v4().to_string(), "administrator".into());
        assert!(admin.is_admin());

        let admin_upper =
            RequestIdentity::authenticated(Uuid::new_v4().to_string(), "ADMINISTRATOR".into());
        assert!(admin_upper.is_admin());

        let user = RequestIdentity::authenticated(Uuid::new_v4().to_string(), "User".into());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_unparseable_id_claim_yields_none() {
        let identity = RequestIdentity::authenticated("not-a-uuid".into(), "User".into());
        assert!(identity.user_id().is_none());
    }

    #[test]
    fn test_valid_id_claim_parses() {
        let id = Uuid::new_v4();
        let identity = RequestIdentity::authenticated(id.to_string(), "User".into());
        assert_eq!(identity.user_id().map(|u| u.0), Some(id));
    }
}
