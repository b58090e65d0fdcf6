use super::*;

/// Tests the SQL ranking order.
///
/// Expected: confirmed before tentative before declined, ties by creation
/// order
#[tokio::test]
async fn ranks_confirmed_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = create_user(db).await?;
    let event = EventFactory::new(db, organizer.id).build().await?;

    let declined = create_user_with_name(db, "Declined").await?;
    let tentative = create_user_with_name(db, "Tentative").await?;
    let confirmed_a = create_user_with_name(db, "ConfirmedA").await?;
    let confirmed_b = create_user_with_name(db, "ConfirmedB").await?;

    // Insertion order deliberately scrambled relative to rank order.
    EventSignupFactory::new(db, event.id, declined.id)
        .status("declined")
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, confirmed_a.id)
        .status("confirmed")
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, tentative.id)
        .status("tentative")
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, confirmed_b.id)
        .status("confirmed")
        .build()
        .await?;

    let ranked = EventSignupRepository::new(db)
        .get_ranked_by_event(event.id, None)
        .await?;

    let order: Vec<i32> = ranked.iter().map(|s| s.user_id).collect();
    assert_eq!(
        order,
        vec![confirmed_a.id, confirmed_b.id, tentative.id, declined.id]
    );

    Ok(())
}

/// Tests the preview limit.
///
/// Expected: at most `limit` rows, best-ranked first
#[tokio::test]
async fn respects_the_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = create_user(db).await?;
    let event = EventFactory::new(db, organizer.id).build().await?;

    for i in 0..8 {
        let user = create_user(db).await?;
        let status = if i < 4 { "confirmed" } else { "declined" };
        EventSignupFactory::new(db, event.id, user.id)
            .status(status)
            .build()
            .await?;
    }

    let ranked = EventSignupRepository::new(db)
        .get_ranked_by_event(event.id, Some(6))
        .await?;

    assert_eq!(ranked.len(), 6);
    assert!(ranked[..4]
        .iter()
        .all(|s| s.status == SignupStatus::Confirmed));

    Ok(())
}
