use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::PartyError;

// Which link a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessRole {
    Party,
    Admin,
}

// The two deployment-wide access tokens, as stored in tokens.json.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokens {
    pub party: String,
    pub admin: String,
}

impl AccessTokens {
    // Fresh pair from the OS random source (UUID v4, 122 random bits each).
    pub fn generate() -> Self {
        Self {
            party: Uuid::new_v4().simple().to_string(),
            admin: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn token_for(&self, role: AccessRole) -> &str {
        match role {
            AccessRole::Party => &self.party,
            AccessRole::Admin => &self.admin,
        }
    }

    /// Accept `presented` only if it is exactly the token for `role`.
    pub fn authorize(&self, role: AccessRole, presented: &str) -> Result<(), PartyError> {
        if constant_time_eq(self.token_for(role).as_bytes(), presented.as_bytes()) {
            Ok(())
        } else {
            Err(PartyError::InvalidToken)
        }
    }
}

// Comparison time depends only on the lengths, never on where bytes differ.
fn constant_time_eq(expected: &[u8], presented: &[u8]) -> bool {
    if expected.len() != presented.len() {
        return false;
    }
    expected
        .iter()
        .zip(presented)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
