use super::*;

/// Tests renaming an existing user.
///
/// Expected: Ok(Some(User)) carrying the new name, other fields untouched
#[tokio::test]
async fn updates_the_display_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).username("Before").build().await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_username(created.id, "After".to_string())
        .await?
        .expect("user should exist");

    assert_eq!(updated.username, "After");
    assert_eq!(updated.id, created.id);

    // The change is persisted, not just reflected in the return value.
    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.username, "After");

    Ok(())
}

/// Tests renaming a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_username(42, "Ghost".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
