use super::*;

/// Tests the demote-then-promote main swap.
///
/// Expected: exactly one main per (user, game) after the swap
#[tokio::test]
async fn swaps_the_main_within_a_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let old_main = CharacterFactory::new(db, user.id)
        .game("wow-classic")
        .is_main(true)
        .build()
        .await?;
    let alt = CharacterFactory::new(db, user.id)
        .game("wow-classic")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    repo.set_main(user.id, "wow-classic", alt.id).await?;

    let characters = repo.get_all_by_user(user.id).await?;
    let mains: Vec<_> = characters.iter().filter(|c| c.is_main).collect();

    assert_eq!(mains.len(), 1);
    assert_eq!(mains[0].id, alt.id);
    assert!(!characters.iter().any(|c| c.id == old_main.id && c.is_main));

    Ok(())
}

/// Tests that promoting in one game leaves another game's main alone.
///
/// Expected: each game keeps its own single main
#[tokio::test]
async fn leaves_other_games_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let wow_main = CharacterFactory::new(db, user.id)
        .game("wow-classic")
        .is_main(true)
        .build()
        .await?;
    let ffxiv_main = CharacterFactory::new(db, user.id)
        .game("ffxiv")
        .is_main(true)
        .build()
        .await?;
    let ffxiv_alt = CharacterFactory::new(db, user.id)
        .game("ffxiv")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    repo.set_main(user.id, "ffxiv", ffxiv_alt.id).await?;

    let characters = repo.get_all_by_user(user.id).await?;
    let is_main = |id: i32| characters.iter().any(|c| c.id == id && c.is_main);

    assert!(is_main(wow_main.id));
    assert!(is_main(ffxiv_alt.id));
    assert!(!is_main(ffxiv_main.id));

    Ok(())
}
