use super::*;

/// Tests window overlap detection.
///
/// Expected: events touching the window are returned, events entirely
/// before or after it are not
#[tokio::test]
async fn returns_only_overlapping_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let window_start = Utc::now() + Duration::days(7);
    let window_end = window_start + Duration::days(7);

    EventFactory::new(db, user.id)
        .title("Before")
        .start_time(window_start - Duration::hours(5))
        .end_time(window_start - Duration::hours(3))
        .build()
        .await?;
    EventFactory::new(db, user.id)
        .title("Straddles start")
        .start_time(window_start - Duration::hours(1))
        .end_time(window_start + Duration::hours(1))
        .build()
        .await?;
    EventFactory::new(db, user.id)
        .title("Inside")
        .start_time(window_start + Duration::days(1))
        .end_time(window_start + Duration::days(1) + Duration::hours(2))
        .build()
        .await?;
    EventFactory::new(db, user.id)
        .title("After")
        .start_time(window_end + Duration::hours(1))
        .end_time(window_end + Duration::hours(3))
        .build()
        .await?;

    let events = EventRepository::new(db)
        .get_overlapping_window(window_start, window_end)
        .await?;

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Straddles start", "Inside"]);

    Ok(())
}
