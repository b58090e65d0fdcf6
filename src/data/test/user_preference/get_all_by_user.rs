use super::*;

/// Tests listing preferences for a user.
///
/// Expected: only the user's own rows, ordered by key
#[tokio::test]
async fn returns_only_the_users_preferences_ordered_by_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserPreference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;

    let repo = UserPreferenceRepository::new(db);
    repo.upsert(user.id, "timezone", &serde_json::json!("Europe/Berlin"))
        .await?;
    repo.upsert(user.id, "layout", &serde_json::json!({"compact": true}))
        .await?;
    repo.upsert(other.id, "timezone", &serde_json::json!("US/Pacific"))
        .await?;

    let preferences = repo.get_all_by_user(user.id).await?;

    assert_eq!(preferences.len(), 2);
    assert_eq!(preferences[0].key, "layout");
    assert_eq!(preferences[1].key, "timezone");
    assert_eq!(preferences[1].value, serde_json::json!("Europe/Berlin"));

    Ok(())
}

/// Tests listing preferences for a user without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_user_without_preferences() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserPreference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let preferences = UserPreferenceRepository::new(db)
        .get_all_by_user(user.id)
        .await?;

    assert!(preferences.is_empty());

    Ok(())
}
