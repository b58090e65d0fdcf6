use super::*;

/// Tests replacing a template wholesale.
///
/// Expected: old rows gone, new rows stored
#[tokio::test]
async fn replaces_all_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeTemplate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    create_template_slot(db, user.id, 0, 19).await?;
    create_template_slot(db, user.id, 1, 20).await?;

    let repo = GameTimeTemplateRepository::new(db);
    repo.replace_for_user(
        user.id,
        &[
            TemplateSlot {
                weekday: 4,
                hour: 22,
            },
            TemplateSlot {
                weekday: 5,
                hour: 14,
            },
        ],
    )
    .await?;

    let slots = repo.get_by_user(user.id).await?;

    assert_eq!(
        slots,
        vec![
            TemplateSlot {
                weekday: 4,
                hour: 22
            },
            TemplateSlot {
                weekday: 5,
                hour: 14
            },
        ]
    );

    Ok(())
}

/// Tests clearing a template with an empty slot set.
///
/// Expected: no rows remain
#[tokio::test]
async fn clears_with_empty_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeTemplate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    create_template_slot(db, user.id, 0, 19).await?;

    let repo = GameTimeTemplateRepository::new(db);
    repo.replace_for_user(user.id, &[]).await?;

    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that replacement is scoped to one user.
///
/// Expected: another user's slots survive
#[tokio::test]
async fn leaves_other_users_slots_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeTemplate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;
    create_template_slot(db, other.id, 3, 18).await?;

    let repo = GameTimeTemplateRepository::new(db);
    repo.replace_for_user(user.id, &[]).await?;

    assert_eq!(repo.get_by_user(other.id).await?.len(), 1);

    Ok(())
}
