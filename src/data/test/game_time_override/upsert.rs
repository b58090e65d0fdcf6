use super::*;

/// Tests inserting and replacing an override cell.
///
/// Expected: one row per (date, hour), carrying the latest availability
#[tokio::test]
async fn replaces_the_cell_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeOverride)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let day = date(2026, 8, 10);

    let repo = GameTimeOverrideRepository::new(db);
    repo.upsert(user.id, day, 20, Availability::Available).await?;
    repo.upsert(user.id, day, 20, Availability::Unavailable)
        .await?;

    let overrides = repo
        .get_by_user_in_range(user.id, day, date(2026, 8, 11))
        .await?;

    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].hour, 20);
    assert_eq!(overrides[0].availability, Availability::Unavailable);

    Ok(())
}
