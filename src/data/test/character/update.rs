use super::*;

/// Tests updating a subset of character fields.
///
/// Expected: provided fields change, omitted fields stay
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let created = CharacterFactory::new(db, user.id)
        .name("Sapphira")
        .class("mage")
        .build()
        .await?;

    let updated = CharacterRepository::new(db)
        .update(
            created.id,
            UpdateCharacterParams {
                name: None,
                class: None,
                role: Some("dps".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Sapphira");
    assert_eq!(updated.class.as_deref(), Some("mage"));
    assert_eq!(updated.role.as_deref(), Some("dps"));

    Ok(())
}

/// Tests updating a missing character.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_character() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CharacterRepository::new(db)
        .update(
            999,
            UpdateCharacterParams {
                name: Some("Ghost".to_string()),
                class: None,
                role: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
