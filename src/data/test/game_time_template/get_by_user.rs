use super::*;

/// Tests reading a user's template slots.
///
/// Expected: own rows only, ordered by weekday then hour
#[tokio::test]
async fn returns_slots_in_grid_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeTemplate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;

    create_template_slot(db, user.id, 2, 20).await?;
    create_template_slot(db, user.id, 0, 21).await?;
    create_template_slot(db, user.id, 0, 19).await?;
    create_template_slot(db, other.id, 5, 10).await?;

    let slots = GameTimeTemplateRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(
        slots,
        vec![
            TemplateSlot {
                weekday: 0,
                hour: 19
            },
            TemplateSlot {
                weekday: 0,
                hour: 21
            },
            TemplateSlot {
                weekday: 2,
                hour: 20
            },
        ]
    );

    Ok(())
}
