//! Seed command implementation.

use aws_sdk_dynamodb::Client;
use chrono::{Duration, Utc};

use rollcall::storage::dynamodb::user_to_item;
use rollcall_core::user::{DiscordId, User, UserClaims};

use super::error::{DynamodbError, Result};

/// Generate deterministic sample user records.
///
/// Ids are consecutive snowflakes, token request times step back one hour
/// per record, and the encrypted id bytes are placeholders (no real
/// ciphertext is needed to exercise lookups).
pub fn generate_seed_users(count: u32) -> Vec<User> {
    let majors = [
        "Computer Science",
        "Electrical Engineering",
        "Mathematics",
        "Biology",
        "History",
    ];
    let schools = ["Engineering", "Natural Sciences", "Liberal Arts"];
    let affiliations = ["student", "employee"];

    let now = Utc::now();
    let base_id: u64 = 80351110224678912;

    (0..count)
        .map(|i| {
            let id = base_id + u64::from(i);
            let requested = now - Duration::hours(i64::from(i));
            let claims = UserClaims {
                major: [majors[i as usize % majors.len()].to_string()].into(),
                school: [schools[i as usize % schools.len()].to_string()].into(),
                affiliation: [affiliations[i as usize % affiliations.len()].to_string()].into(),
            };

            User::new(DiscordId::from(id), requested.timestamp())
                .with_encrypted_eid(id.to_be_bytes().to_vec())
                .with_claims(claims)
        })
        .collect()
}

/// Insert the users into the table, one PutItem per record.
pub async fn seed_users(client: &Client, table_name: &str, users: &[User]) -> Result<usize> {
    let mut inserted = 0;
    for user in users {
        client
            .put_item()
            .table_name(table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seed_users_count_and_unique_ids() {
        let users = generate_seed_users(12);
        assert_eq!(users.len(), 12);

        let ids: std::collections::BTreeSet<_> =
            users.iter().map(|u| u.discord_id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_generate_seed_users_have_claims() {
        for user in generate_seed_users(5) {
            assert!(!user.claims.is_empty());
            assert!(!user.encrypted_eid.is_empty());
        }
    }
}
