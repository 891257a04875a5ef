use serde::{Deserialize, Serialize};

use crate::domain::common::{o_sin_especificar, RecordId};

/// Usuario con sesión abierta en la intranet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionUser {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: String,
}

impl SessionUser {
    pub fn nombre_mostrado(&self) -> &str {
        o_sin_especificar(&self.nombre)
    }

    pub fn es_admin(&self) -> bool {
        self.rol.eq_ignore_ascii_case("admin") || self.rol.eq_ignore_ascii_case("administrador")
    }
}

/// Session reconciliation state machine: `Unknown → Checking →
/// Authenticated | Unauthenticated`.
///
/// There is exactly one instance of this state per page, owned by the session
/// store; every UI region that cares about authentication subscribes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthPhase {
    #[default]
    Unknown,
    Checking,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthPhase {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    /// True while the outcome is not yet known; guards render a neutral
    /// placeholder instead of flashing the locked state.
    pub fn is_resolving(&self) -> bool {
        matches!(self, AuthPhase::Unknown | AuthPhase::Checking)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Credenciales del formulario de acceso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_case_insensitive() {
        let user = SessionUser { rol: "Admin".into(), ..Default::default() };
        assert!(user.es_admin());
        let user = SessionUser { rol: "editor".into(), ..Default::default() };
        assert!(!user.es_admin());
    }

    #[test]
    fn phase_predicates() {
        assert!(AuthPhase::Unknown.is_resolving());
        assert!(AuthPhase::Checking.is_resolving());
        assert!(!AuthPhase::Unauthenticated.is_resolving());
        assert!(AuthPhase::Authenticated(SessionUser::default()).is_authenticated());
    }
}
