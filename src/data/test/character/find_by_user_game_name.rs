use super::*;

/// Tests the duplicate-detection lookup.
///
/// Expected: Some for the exact (user, game, name) triple, None otherwise
#[tokio::test]
async fn matches_the_exact_triple_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    CharacterFactory::new(db, user.id)
        .game("wow-classic")
        .name("Sapphira")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    let hit = repo
        .find_by_user_game_name(user.id, "wow-classic", "Sapphira")
        .await?;
    assert!(hit.is_some());

    let other_game = repo
        .find_by_user_game_name(user.id, "ffxiv", "Sapphira")
        .await?;
    assert!(other_game.is_none());

    let other_name = repo
        .find_by_user_game_name(user.id, "wow-classic", "Someone")
        .await?;
    assert!(other_name.is_none());

    Ok(())
}
