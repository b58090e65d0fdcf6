use super::*;

/// Tests listing a user's characters.
///
/// Expected: only own characters, mains before alts
#[tokio::test]
async fn lists_mains_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;

    CharacterFactory::new(db, user.id)
        .name("Aaron")
        .build()
        .await?;
    CharacterFactory::new(db, user.id)
        .name("Zelda")
        .is_main(true)
        .build()
        .await?;
    CharacterFactory::new(db, other.id)
        .name("Intruder")
        .build()
        .await?;

    let characters = CharacterRepository::new(db).get_all_by_user(user.id).await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].name, "Zelda");
    assert!(characters[0].is_main);
    assert_eq!(characters[1].name, "Aaron");

    Ok(())
}
