use super::*;
use crate::{
    model::game_time::TemplateSlot,
    service::game_time::grid,
};

/// A future event day, far enough out that "upcoming" holds whenever the
/// test runs, with a known clock time.
fn future_event_day() -> NaiveDate {
    Utc::now().date_naive() + Days::new(14)
}

/// Tests committed-slot preservation on template replacement.
///
/// A confirmed signup on an upcoming 20:00-22:00 event pins the event's two
/// weekly hours; submitting a template without them must re-add them.
#[tokio::test]
async fn preserves_slots_committed_by_confirmed_signups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_time_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let day = future_event_day();
    let weekday = grid::iso_weekday_of(day);

    let event = EventFactory::new(db, user.id)
        .start_time(at(day, 20, 0))
        .end_time(at(day, 22, 0))
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, user.id)
        .status("confirmed")
        .build()
        .await?;

    let submitted = vec![TemplateSlot {
        weekday: (weekday + 1) % 7,
        hour: 10,
    }];

    let service = GameTimeService::new(db);
    let result = service.replace_template(user.id, submitted.clone()).await?;

    let pinned = [
        TemplateSlot { weekday, hour: 20 },
        TemplateSlot { weekday, hour: 21 },
    ];

    assert_eq!(result.preserved, pinned.to_vec());
    for slot in pinned.iter().chain(submitted.iter()) {
        assert!(result.slots.contains(slot));
    }
    assert_eq!(result.slots.len(), 3);

    // The preserved slots are actually stored, not just reported.
    let stored = service.get_template(user.id).await?;
    assert_eq!(stored.len(), 3);

    Ok(())
}

/// Tests that a submission already containing the committed hours reports
/// nothing as preserved.
#[tokio::test]
async fn reports_nothing_preserved_when_submission_keeps_committed_hours(
) -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_time_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let day = future_event_day();
    let weekday = grid::iso_weekday_of(day);

    let event = EventFactory::new(db, user.id)
        .start_time(at(day, 20, 0))
        .end_time(at(day, 21, 0))
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, user.id)
        .status("confirmed")
        .build()
        .await?;

    let result = GameTimeService::new(db)
        .replace_template(user.id, vec![TemplateSlot { weekday, hour: 20 }])
        .await?;

    assert!(result.preserved.is_empty());
    assert_eq!(result.slots, vec![TemplateSlot { weekday, hour: 20 }]);

    Ok(())
}

/// Tests that non-confirmed signups do not pin template hours.
#[tokio::test]
async fn tentative_signups_do_not_preserve_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_time_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let day = future_event_day();

    let event = EventFactory::new(db, user.id)
        .start_time(at(day, 20, 0))
        .end_time(at(day, 22, 0))
        .build()
        .await?;
    EventSignupFactory::new(db, event.id, user.id)
        .status("tentative")
        .build()
        .await?;

    let result = GameTimeService::new(db)
        .replace_template(user.id, Vec::new())
        .await?;

    assert!(result.preserved.is_empty());
    assert!(result.slots.is_empty());

    Ok(())
}

/// Tests slot range validation.
///
/// Expected: Err(AppError::BadRequest) for out-of-grid slots
#[tokio::test]
async fn rejects_slots_outside_the_grid() {
    let test = TestBuilder::new()
        .with_game_time_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameTimeService::new(db)
        .replace_template(
            1,
            vec![TemplateSlot {
                weekday: 7,
                hour: 0,
            }],
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
