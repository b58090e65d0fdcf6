use super::*;

/// Tests creating a character with all fields.
///
/// Expected: Ok(Character) with stored values and a fresh ID
#[tokio::test]
async fn creates_a_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let character = CharacterRepository::new(db)
        .create(CreateCharacterParams {
            user_id: user.id,
            game: "wow-classic".to_string(),
            name: "Sapphira".to_string(),
            class: Some("mage".to_string()),
            role: Some("dps".to_string()),
            is_main: true,
        })
        .await?;

    assert_eq!(character.user_id, user.id);
    assert_eq!(character.game, "wow-classic");
    assert_eq!(character.name, "Sapphira");
    assert_eq!(character.class.as_deref(), Some("mage"));
    assert_eq!(character.role.as_deref(), Some("dps"));
    assert!(character.is_main);

    Ok(())
}
