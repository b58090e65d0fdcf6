use super::*;

/// Tests creating and reading back an event.
///
/// Expected: Ok(Event) with stored values, retrievable by ID
#[tokio::test]
async fn creates_and_fetches_an_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::hours(3);

    let repo = EventRepository::new(db);
    let created = repo
        .create(
            "Molten Core".to_string(),
            Some("Bring consumables".to_string()),
            start,
            end,
            user.id,
        )
        .await?;

    let fetched = repo.get_by_id(created.id).await?.expect("event should exist");

    assert_eq!(fetched.title, "Molten Core");
    assert_eq!(fetched.description.as_deref(), Some("Bring consumables"));
    assert_eq!(fetched.created_by, user.id);
    assert_eq!(fetched.start_time, created.start_time);

    Ok(())
}

/// Tests fetching a missing event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db).get_by_id(123).await?;

    assert!(result.is_none());

    Ok(())
}
