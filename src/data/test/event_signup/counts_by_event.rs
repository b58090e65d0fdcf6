use super::*;

/// Tests per-status counting.
///
/// Expected: counts match the stored signups of this event only
#[tokio::test]
async fn counts_each_status_separately() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = create_user(db).await?;
    let event = EventFactory::new(db, organizer.id).build().await?;
    let other_event = EventFactory::new(db, organizer.id).build().await?;

    for status in ["confirmed", "confirmed", "tentative"] {
        let user = create_user(db).await?;
        EventSignupFactory::new(db, event.id, user.id)
            .status(status)
            .build()
            .await?;
    }

    let outsider = create_user(db).await?;
    EventSignupFactory::new(db, other_event.id, outsider.id)
        .status("declined")
        .build()
        .await?;

    let counts = EventSignupRepository::new(db).counts_by_event(event.id).await?;

    assert_eq!(counts.confirmed, 2);
    assert_eq!(counts.tentative, 1);
    assert_eq!(counts.declined, 0);

    Ok(())
}
