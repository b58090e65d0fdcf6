use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .username("Sapphira")
        .discord_id("123456789")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?;

    let user = user.expect("user should exist");
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "Sapphira");
    assert_eq!(user.discord_id, Some(123456789));

    Ok(())
}

/// Tests querying for a non-existent user.
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

    let result = UserRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
