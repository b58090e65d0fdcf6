use super::*;

/// Tests the cutoff filter and ordering of the event listing.
///
/// Expected: events ending before the cutoff are dropped, the rest are
/// returned soonest first
#[tokio::test]
async fn filters_by_cutoff_and_orders_by_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let now = Utc::now();

    // Ended two days ago, outside any cutoff we pass below.
    EventFactory::new(db, user.id)
        .title("Old")
        .start_time(now - Duration::days(2))
        .end_time(now - Duration::days(2) + Duration::hours(2))
        .build()
        .await?;
    EventFactory::new(db, user.id)
        .title("Later")
        .start_time(now + Duration::days(2))
        .end_time(now + Duration::days(2) + Duration::hours(2))
        .build()
        .await?;
    EventFactory::new(db, user.id)
        .title("Sooner")
        .start_time(now + Duration::days(1))
        .end_time(now + Duration::days(1) + Duration::hours(2))
        .build()
        .await?;

    let (events, total) = EventRepository::new(db).get_paginated(now, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Sooner");
    assert_eq!(events[1].title, "Later");

    Ok(())
}

/// Tests page slicing.
///
/// Expected: second page holds the remaining row and total stays constant
#[tokio::test]
async fn slices_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let now = Utc::now();

    for offset in 1..=3 {
        EventFactory::new(db, user.id)
            .start_time(now + Duration::days(offset))
            .end_time(now + Duration::days(offset) + Duration::hours(1))
            .build()
            .await?;
    }

    let repo = EventRepository::new(db);
    let (first_page, total) = repo.get_paginated(now, 0, 2).await?;
    let (second_page, _) = repo.get_paginated(now, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);

    Ok(())
}
