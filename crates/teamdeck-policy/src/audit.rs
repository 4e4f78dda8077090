//! Authorization audit logging.

use crate::authorizer::Action;
use crate::model::UserProfile;
use crate::role::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Authorization audit event.
#[derive(Debug, Clone, Serialize)]
pub struct AuthzDecision {
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub action: String,
    pub resource_id: Option<String>,
    pub granted: bool,
    pub reason: Option<String>,
}

impl AuthzDecision {
    pub fn new(
        user: Option<&UserProfile>,
        action: Action,
        resource_id: Option<&str>,
        granted: bool,
        reason: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id: user.map(|u| u.uid.to_string()),
            role: user.map(|u| u.role),
            action: action.to_string(),
            resource_id: resource_id.map(String::from),
            granted,
            reason,
        }
    }

    pub fn log(&self) {
        if self.granted {
            info!(
                event = "authz_granted",
                user_id = ?self.user_id,
                role = ?self.role,
                action = %self.action,
                resource_id = ?self.resource_id,
                "Authorization granted"
            );
        } else {
            warn!(
                event = "authz_denied",
                user_id = ?self.user_id,
                role = ?self.role,
                action = %self.action,
                resource_id = ?self.resource_id,
                reason = ?self.reason,
                "Authorization denied"
            );
        }
    }
}
