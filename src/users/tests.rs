//! Tests for the user directory
//!
//! These tests verify the three repository operations against an in-memory
//! sqlite database: lookup by email, record creation, and profile updates.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations;
    use chrono::Utc;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_directory() -> SqliteUserDirectory {
        // A single connection keeps every query on the same in-memory db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        migrations::run_migrations(&pool).await.unwrap();

        SqliteUserDirectory::new(pool)
    }

    #[tokio::test]
    async fn test_find_by_email_missing_returns_none() {
        let directory = setup_test_directory().await;

        let found = directory
            .find_by_email("nobody@example.com")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_then_find_by_email() {
        let directory = setup_test_directory().await;

        let created = directory
            .create(
                "Nick D",
                "nick@example.com",
                Some("https://lh3.example.com/photo.jpg"),
            )
            .await
            .unwrap();

        assert_eq!(created.name, "Nick D");
        assert_eq!(created.email, "nick@example.com");
        assert_eq!(
            created.picture.as_deref(),
            Some("https://lh3.example.com/photo.jpg")
        );
        assert_eq!(created.joined, created.last_active);

        let found = directory
            .find_by_email("nick@example.com")
            .await
            .unwrap()
            .expect("created user should be findable");

        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let directory = setup_test_directory().await;

        directory
            .create("Nick D", "nick@example.com", None)
            .await
            .unwrap();

        let found = directory.find_by_email("Nick@Example.com").await.unwrap();

        assert!(found.is_none(), "lookup must match email exactly as stored");
    }

    #[tokio::test]
    async fn test_create_duplicate_email_fails() {
        let directory = setup_test_directory().await;

        directory
            .create("Nick D", "nick@example.com", None)
            .await
            .unwrap();

        let duplicate = directory.create("Other", "nick@example.com", None).await;

        assert!(duplicate.is_err(), "email uniqueness must be enforced");
    }

    #[tokio::test]
    async fn test_update_profile_keeps_id_and_joined() {
        let directory = setup_test_directory().await;

        let created = directory
            .create("Old Name", "nick@example.com", None)
            .await
            .unwrap();

        let later = Utc::now();
        let updated = directory
            .update_profile(
                created.id,
                "New Name",
                Some("https://lh3.example.com/new.jpg"),
                later,
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New Name");
        assert_eq!(
            updated.picture.as_deref(),
            Some("https://lh3.example.com/new.jpg")
        );
        assert_eq!(updated.joined, created.joined);
        assert_eq!(updated.last_active, later);
    }
}
