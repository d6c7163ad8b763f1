//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the `User` domain type. These are testable in isolation without
//! DynamoDB access.

use std::collections::{BTreeSet, HashMap};

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use rollcall_core::storage::StoreError;
use rollcall_core::user::{DiscordId, User, UserClaims};

// ============================================================================
// Attribute names in the `users` table
// ============================================================================

pub const ATTR_DISCORD_ID: &str = "discord_id";
pub const ATTR_TOKEN_REQUESTED_AT: &str = "token_requested_at";
pub const ATTR_ENCRYPTED_EID: &str = "encrypted_eid";
pub const ATTR_CLAIMS: &str = "claims";

const CLAIM_MAJOR: &str = "major";
const CLAIM_SCHOOL: &str = "school";
const CLAIM_AFFILIATION: &str = "affiliation";

// ============================================================================
// User conversions
// ============================================================================

/// Convert a User to a DynamoDB item.
///
/// Only the seeding tooling and tests write items; the store itself is
/// read-only.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        ATTR_DISCORD_ID.to_string(),
        AttributeValue::S(user.discord_id.as_str().to_string()),
    );
    item.insert(
        ATTR_TOKEN_REQUESTED_AT.to_string(),
        AttributeValue::N(user.token_requested_at.to_string()),
    );
    item.insert(
        ATTR_ENCRYPTED_EID.to_string(),
        AttributeValue::B(Blob::new(user.encrypted_eid.clone())),
    );
    item.insert(
        ATTR_CLAIMS.to_string(),
        AttributeValue::M(claims_to_map(&user.claims)),
    );

    item
}

/// Convert a DynamoDB item to a User.
///
/// The decode is validated: a missing or ill-typed required attribute is
/// an `InvalidRecord` error rather than a partially filled struct.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, StoreError> {
    let discord_id = DiscordId::new(get_string(item, ATTR_DISCORD_ID)?)
        .map_err(|e| StoreError::InvalidRecord(e.to_string()))?;

    Ok(User {
        discord_id,
        token_requested_at: get_number(item, ATTR_TOKEN_REQUESTED_AT)?,
        encrypted_eid: get_binary(item, ATTR_ENCRYPTED_EID)?,
        claims: item
            .get(ATTR_CLAIMS)
            .map(map_to_claims)
            .transpose()?
            .unwrap_or_default(),
    })
}

// ============================================================================
// Claims conversions
// ============================================================================

/// Convert UserClaims to a DynamoDB map attribute.
///
/// DynamoDB rejects empty string sets, so empty claim sets are omitted
/// from the map; `map_to_claims` defaults them back to empty.
fn claims_to_map(claims: &UserClaims) -> HashMap<String, AttributeValue> {
    let mut map = HashMap::new();
    for (key, set) in [
        (CLAIM_MAJOR, &claims.major),
        (CLAIM_SCHOOL, &claims.school),
        (CLAIM_AFFILIATION, &claims.affiliation),
    ] {
        if !set.is_empty() {
            map.insert(
                key.to_string(),
                AttributeValue::Ss(set.iter().cloned().collect()),
            );
        }
    }
    map
}

/// Convert a DynamoDB map attribute to UserClaims.
fn map_to_claims(value: &AttributeValue) -> Result<UserClaims, StoreError> {
    let map = value.as_m().map_err(|_| {
        StoreError::InvalidRecord(format!("Attribute is not a map: {}", ATTR_CLAIMS))
    })?;

    Ok(UserClaims {
        major: get_string_set(map, CLAIM_MAJOR)?,
        school: get_string_set(map, CLAIM_SCHOOL)?,
        affiliation: get_string_set(map, CLAIM_AFFILIATION)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidRecord(format!("Missing or invalid field: {}", key)))
}

/// Get a required numeric attribute as i64.
fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, StoreError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::InvalidRecord(format!("Missing or invalid field: {}", key)))?;
    n.parse::<i64>()
        .map_err(|e| StoreError::InvalidRecord(format!("Invalid number {}: {}", key, e)))
}

/// Get a required binary attribute.
fn get_binary(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Vec<u8>, StoreError> {
    item.get(key)
        .and_then(|v| v.as_b().ok())
        .map(|b| b.as_ref().to_vec())
        .ok_or_else(|| StoreError::InvalidRecord(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string-set attribute, defaulting to empty when absent.
fn get_string_set(
    map: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<BTreeSet<String>, StoreError> {
    match map.get(key) {
        None => Ok(BTreeSet::new()),
        Some(v) => v
            .as_ss()
            .map(|ss| ss.iter().cloned().collect())
            .map_err(|_| StoreError::InvalidRecord(format!("Invalid string set: {}", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> UserClaims {
        UserClaims {
            major: ["Computer Science".to_string()].into(),
            school: ["Engineering".to_string()].into(),
            affiliation: ["student".to_string(), "employee".to_string()].into(),
        }
    }

    fn sample_user() -> User {
        User::new(DiscordId::from(80351110224678912u64), 1_700_000_000)
            .with_encrypted_eid(vec![0xde, 0xad, 0xbe, 0xef])
            .with_claims(sample_claims())
    }

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();
        let item = user_to_item(&user);
        let parsed = item_to_user(&item).unwrap();

        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_item_has_correct_attributes() {
        let user = sample_user();
        let item = user_to_item(&user);

        assert_eq!(
            item.get("discord_id").unwrap().as_s().unwrap(),
            "80351110224678912"
        );
        assert_eq!(
            item.get("token_requested_at").unwrap().as_n().unwrap(),
            "1700000000"
        );
        assert_eq!(
            item.get("encrypted_eid").unwrap().as_b().unwrap().as_ref(),
            &[0xde, 0xad, 0xbe, 0xef]
        );

        let claims = item.get("claims").unwrap().as_m().unwrap();
        assert_eq!(
            claims.get("affiliation").unwrap().as_ss().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_empty_claim_sets_are_omitted() {
        let user = User::new(DiscordId::from(1u64), 0);
        let item = user_to_item(&user);

        let claims = item.get("claims").unwrap().as_m().unwrap();
        assert!(claims.is_empty());

        let parsed = item_to_user(&item).unwrap();
        assert!(parsed.claims.is_empty());
    }

    #[test]
    fn test_missing_claims_attribute_defaults_to_empty() {
        let mut item = user_to_item(&sample_user());
        item.remove("claims");

        let parsed = item_to_user(&item).unwrap();
        assert!(parsed.claims.is_empty());
    }

    #[test]
    fn test_missing_discord_id_is_invalid() {
        let mut item = user_to_item(&sample_user());
        item.remove("discord_id");

        let err = item_to_user(&item).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidRecord("Missing or invalid field: discord_id".to_string())
        );
    }

    #[test]
    fn test_non_numeric_discord_id_is_invalid() {
        let mut item = user_to_item(&sample_user());
        item.insert(
            "discord_id".to_string(),
            AttributeValue::S("not-a-snowflake".to_string()),
        );

        assert!(matches!(
            item_to_user(&item),
            Err(StoreError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_malformed_timestamp_is_invalid() {
        let mut item = user_to_item(&sample_user());
        item.insert(
            "token_requested_at".to_string(),
            AttributeValue::S("1700000000".to_string()),
        );

        assert!(matches!(
            item_to_user(&item),
            Err(StoreError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_malformed_claims_is_invalid() {
        let mut item = user_to_item(&sample_user());
        item.insert(
            "claims".to_string(),
            AttributeValue::S("not-a-map".to_string()),
        );

        assert!(matches!(
            item_to_user(&item),
            Err(StoreError::InvalidRecord(_))
        ));
    }
}
