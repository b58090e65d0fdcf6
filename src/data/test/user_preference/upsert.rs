use super::*;

/// Tests inserting a fresh preference.
///
/// Expected: Ok(Preference) with the stored value
#[tokio::test]
async fn inserts_a_new_preference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserPreference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let preference = UserPreferenceRepository::new(db)
        .upsert(user.id, "timezone", &serde_json::json!("Europe/Berlin"))
        .await?;

    assert_eq!(preference.key, "timezone");
    assert_eq!(preference.value, serde_json::json!("Europe/Berlin"));

    Ok(())
}

/// Tests replacing an existing preference value.
///
/// Expected: one stored row per key, holding the latest value
#[tokio::test]
async fn replaces_the_value_for_an_existing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserPreference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = UserPreferenceRepository::new(db);

    repo.upsert(user.id, "layout", &serde_json::json!({"compact": false}))
        .await?;
    repo.upsert(user.id, "layout", &serde_json::json!({"compact": true}))
        .await?;

    let preferences = repo.get_all_by_user(user.id).await?;

    assert_eq!(preferences.len(), 1);
    assert_eq!(preferences[0].value, serde_json::json!({"compact": true}));

    Ok(())
}
