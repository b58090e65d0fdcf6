use super::*;

/// Tests owner-scoped deletion.
///
/// Expected: Ok(true) for the owner, Ok(false) for anyone else
#[tokio::test]
async fn only_the_owner_can_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeAbsence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;
    let absence = create_absence(db, user.id, date(2026, 8, 10), date(2026, 8, 12)).await?;

    let repo = GameTimeAbsenceRepository::new(db);

    assert!(!repo.delete_by_user(other.id, absence.id).await?);
    assert!(repo.delete_by_user(user.id, absence.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}
