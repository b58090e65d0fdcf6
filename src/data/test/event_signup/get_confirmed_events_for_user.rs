use super::*;

/// Tests the confirmed-events join used for committed-slot computation.
///
/// Expected: only events with a confirmed signup by the user that have not
/// ended by the cutoff
#[tokio::test]
async fn returns_upcoming_confirmed_events_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let now = Utc::now();

    let upcoming = EventFactory::new(db, user.id)
        .title("Upcoming confirmed")
        .start_time(now + Duration::days(1))
        .end_time(now + Duration::days(1) + Duration::hours(2))
        .build()
        .await?;
    let past = EventFactory::new(db, user.id)
        .title("Past confirmed")
        .start_time(now - Duration::days(1))
        .end_time(now - Duration::days(1) + Duration::hours(2))
        .build()
        .await?;
    let tentative_event = EventFactory::new(db, user.id)
        .title("Upcoming tentative")
        .start_time(now + Duration::days(2))
        .end_time(now + Duration::days(2) + Duration::hours(2))
        .build()
        .await?;

    EventSignupFactory::new(db, upcoming.id, user.id)
        .status("confirmed")
        .build()
        .await?;
    EventSignupFactory::new(db, past.id, user.id)
        .status("confirmed")
        .build()
        .await?;
    EventSignupFactory::new(db, tentative_event.id, user.id)
        .status("tentative")
        .build()
        .await?;

    let events = EventSignupRepository::new(db)
        .get_confirmed_events_for_user(user.id, now)
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, upcoming.id);

    Ok(())
}

/// Tests scoping to one user's signups.
///
/// Expected: another user's confirmed signup does not leak in
#[tokio::test]
async fn ignores_other_users_signups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;
    let event = EventFactory::new(db, other.id).build().await?;

    EventSignupFactory::new(db, event.id, other.id)
        .status("confirmed")
        .build()
        .await?;

    let events = EventSignupRepository::new(db)
        .get_confirmed_events_for_user(user.id, Utc::now())
        .await?;

    assert!(events.is_empty());

    Ok(())
}
