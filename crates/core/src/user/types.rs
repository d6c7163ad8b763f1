use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DiscordIdError;

/// A Discord user id (snowflake), validated once at construction.
///
/// Discord hands these out as `u64` values; the backing store keys records
/// by their decimal string form, so that is what this wrapper holds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiscordId(String);

impl DiscordId {
    /// Creates a validated Discord id from its decimal string form.
    pub fn new(id: impl Into<String>) -> Result<Self, DiscordIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DiscordIdError::Empty);
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DiscordIdError::NotNumeric(id));
        }
        Ok(Self(id))
    }

    /// Returns the id in its decimal string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for DiscordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl TryFrom<String> for DiscordId {
    type Error = DiscordIdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl FromStr for DiscordId {
    type Err = DiscordIdError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::new(id)
    }
}

impl From<DiscordId> for String {
    fn from(id: DiscordId) -> Self {
        id.0
    }
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attribute values asserted about a user during verification.
///
/// Each field is an order-irrelevant set of strings; any of them may be
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    #[serde(default)]
    pub major: BTreeSet<String>,
    #[serde(default)]
    pub school: BTreeSet<String>,
    #[serde(default)]
    pub affiliation: BTreeSet<String>,
}

impl UserClaims {
    /// Returns true if no claim set holds any value.
    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.school.is_empty() && self.affiliation.is_empty()
    }
}

/// A registered user linked to a Discord account.
///
/// Records are created and mutated by the verification flow; this library
/// only ever reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub discord_id: DiscordId,
    /// Epoch seconds of the last token issuance request.
    pub token_requested_at: i64,
    /// Encrypted external identifier. Opaque bytes, never decrypted here.
    #[serde(default)]
    pub encrypted_eid: Vec<u8>,
    #[serde(default)]
    pub claims: UserClaims,
}

impl User {
    /// Creates a user record with empty claims and no encrypted id.
    pub fn new(discord_id: DiscordId, token_requested_at: i64) -> Self {
        Self {
            discord_id,
            token_requested_at,
            encrypted_eid: Vec::new(),
            claims: UserClaims::default(),
        }
    }

    /// Sets the encrypted external identifier.
    pub fn with_encrypted_eid(mut self, eid: impl Into<Vec<u8>>) -> Self {
        self.encrypted_eid = eid.into();
        self
    }

    /// Sets the claims for this user.
    pub fn with_claims(mut self, claims: UserClaims) -> Self {
        self.claims = claims;
        self
    }

    /// Returns the last token request as a UTC timestamp, if the stored
    /// epoch value is representable.
    pub fn token_requested_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.token_requested_at, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(major: &[&str], school: &[&str], affiliation: &[&str]) -> UserClaims {
        UserClaims {
            major: major.iter().map(|s| s.to_string()).collect(),
            school: school.iter().map(|s| s.to_string()).collect(),
            affiliation: affiliation.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_discord_id_accepts_snowflakes() {
        let id = DiscordId::new("80351110224678912").unwrap();
        assert_eq!(id.as_str(), "80351110224678912");
        assert_eq!(id.to_string(), "80351110224678912");
    }

    #[test]
    fn test_discord_id_rejects_empty() {
        assert_eq!(DiscordId::new(""), Err(DiscordIdError::Empty));
    }

    #[test]
    fn test_discord_id_rejects_non_numeric() {
        assert_eq!(
            DiscordId::new("not-a-snowflake"),
            Err(DiscordIdError::NotNumeric("not-a-snowflake".to_string()))
        );
        assert_eq!(
            DiscordId::new(" 123"),
            Err(DiscordIdError::NotNumeric(" 123".to_string()))
        );
    }

    #[test]
    fn test_discord_id_from_u64() {
        let id = DiscordId::from(80351110224678912u64);
        assert_eq!(id.as_str(), "80351110224678912");
    }

    #[test]
    fn test_discord_id_serde_validates() {
        let id: DiscordId = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(id.as_str(), "123");
        assert!(serde_json::from_str::<DiscordId>("\"\"").is_err());
        assert!(serde_json::from_str::<DiscordId>("\"12a\"").is_err());
    }

    #[test]
    fn test_claims_is_empty() {
        assert!(UserClaims::default().is_empty());
        assert!(!claims(&["Computer Science"], &[], &[]).is_empty());
    }

    #[test]
    fn test_claims_deduplicate() {
        let c = claims(&["CS", "CS", "Math"], &[], &[]);
        assert_eq!(c.major.len(), 2);
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = User::new(DiscordId::from(123u64), 1_700_000_000)
            .with_encrypted_eid(vec![0x01, 0x02, 0xff])
            .with_claims(claims(&["CS"], &["Engineering"], &["student"]));

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }

    #[test]
    fn test_token_requested_time() {
        let user = User::new(DiscordId::from(1u64), 1_700_000_000);
        let time = user.token_requested_time().unwrap();
        assert_eq!(time.timestamp(), 1_700_000_000);
    }
}
