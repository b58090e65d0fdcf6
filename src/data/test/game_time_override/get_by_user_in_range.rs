use super::*;

/// Tests the half-open date range filter.
///
/// Expected: rows on [start, end) only, scoped to the user
#[tokio::test]
async fn filters_by_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeOverride)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;

    create_override(db, user.id, date(2026, 8, 9), 10, "available").await?;
    create_override(db, user.id, date(2026, 8, 10), 11, "available").await?;
    create_override(db, user.id, date(2026, 8, 16), 12, "unavailable").await?;
    create_override(db, user.id, date(2026, 8, 17), 13, "available").await?;
    create_override(db, other.id, date(2026, 8, 12), 14, "available").await?;

    let overrides = GameTimeOverrideRepository::new(db)
        .get_by_user_in_range(user.id, date(2026, 8, 10), date(2026, 8, 17))
        .await?;

    let hours: Vec<u8> = overrides.iter().map(|o| o.hour).collect();
    assert_eq!(hours.len(), 2);
    assert!(hours.contains(&11));
    assert!(hours.contains(&12));

    Ok(())
}
