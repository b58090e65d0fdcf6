use super::*;

/// Tests rewriting an event's fields.
///
/// Expected: all provided fields replace the stored ones
#[tokio::test]
async fn rewrites_event_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let created = EventFactory::new(db, user.id).title("Draft").build().await?;

    let new_start = Utc::now() + Duration::days(3);
    let new_end = new_start + Duration::hours(4);

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            created.id,
            "Final".to_string(),
            None,
            new_start,
            new_end,
        )
        .await?;

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, None);
    assert_eq!(updated.start_time, new_start);
    assert_eq!(updated.end_time, new_end);

    Ok(())
}

/// Tests deleting an event.
///
/// Expected: the event is gone afterwards
#[tokio::test]
async fn delete_removes_the_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let created = EventFactory::new(db, user.id).build().await?;

    let repo = EventRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}
