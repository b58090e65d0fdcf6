use super::*;

/// Tests creating and listing an absence.
///
/// Expected: stored row matches the parameters
#[tokio::test]
async fn creates_an_absence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeAbsence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repo = GameTimeAbsenceRepository::new(db);
    let absence = repo
        .create(CreateAbsenceParams {
            user_id: user.id,
            start_date: date(2026, 8, 10),
            end_date: date(2026, 8, 14),
            reason: Some("Vacation".to_string()),
        })
        .await?;

    assert_eq!(absence.start_date, date(2026, 8, 10));
    assert_eq!(absence.end_date, date(2026, 8, 14));
    assert_eq!(absence.reason.as_deref(), Some("Vacation"));

    let listed = repo.get_by_user(user.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, absence.id);

    Ok(())
}
