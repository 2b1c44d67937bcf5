//! Resolved caller identity.
//!
//! Credential validation happens upstream (identity gateway); by the time
//! a request reaches the service layer the caller is reduced to this
//! context. The optional cohort and gender attributes are the owner keys
//! an unprivileged caller is implicitly scoped to.

use serde::{Deserialize, Serialize};

use super::schedule::Gender;
use crate::api::{ClassId, UserId};

/// Authenticated caller as seen by the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: UserId,
    pub is_superuser: bool,
    pub class_id: Option<ClassId>,
    pub gender: Option<Gender>,
}

impl AuthContext {
    /// Privileged caller; may target any owner key.
    pub fn superuser(user_id: UserId) -> Self {
        Self {
            user_id,
            is_superuser: true,
            class_id: None,
            gender: None,
        }
    }

    /// Regular caller with the given profile attributes.
    pub fn student(user_id: UserId, class_id: Option<ClassId>, gender: Option<Gender>) -> Self {
        Self {
            user_id,
            is_superuser: false,
            class_id,
            gender,
        }
    }
}
