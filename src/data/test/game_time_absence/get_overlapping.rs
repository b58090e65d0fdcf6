use super::*;

/// Tests overlap detection against a week window.
///
/// Expected: ranges touching [start, end) are returned, inclusive ends
/// honored
#[tokio::test]
async fn returns_overlapping_ranges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::GameTimeAbsence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    // Week window under test: 2026-08-10 .. 2026-08-17 (exclusive).
    let ends_on_first_day = create_absence(db, user.id, date(2026, 8, 5), date(2026, 8, 10)).await?;
    let inside = create_absence(db, user.id, date(2026, 8, 12), date(2026, 8, 13)).await?;
    let _before = create_absence(db, user.id, date(2026, 8, 1), date(2026, 8, 9)).await?;
    let _after = create_absence(db, user.id, date(2026, 8, 17), date(2026, 8, 20)).await?;

    let overlapping = GameTimeAbsenceRepository::new(db)
        .get_overlapping(user.id, date(2026, 8, 10), date(2026, 8, 17))
        .await?;

    let ids: Vec<i32> = overlapping.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![ends_on_first_day.id, inside.id]);

    Ok(())
}
