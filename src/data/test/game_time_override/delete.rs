use super::*;

/// Tests removing an override cell.
///
/// Expected: Ok(true) when present, Ok(false) when absent
#[tokio::test]
async fn reports_whether_a_cell_was_removed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeOverride)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let day = date(2026, 8, 10);
    create_override(db, user.id, day, 20, "available").await?;

    let repo = GameTimeOverrideRepository::new(db);

    assert!(repo.delete(user.id, day, 20).await?);
    assert!(!repo.delete(user.id, day, 20).await?);

    Ok(())
}
