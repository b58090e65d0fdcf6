use super::*;

/// Tests withdrawing an existing signup.
///
/// Expected: Ok(true), and the row is gone
#[tokio::test]
async fn removes_the_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let event = EventFactory::new(db, user.id).build().await?;
    EventSignupFactory::new(db, event.id, user.id).build().await?;

    let repo = EventSignupRepository::new(db);
    let removed = repo.delete_by_event_and_user(event.id, user.id).await?;

    assert!(removed);
    assert!(repo
        .find_by_event_and_user(event.id, user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests withdrawing when not signed up.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let event = EventFactory::new(db, user.id).build().await?;

    let removed = EventSignupRepository::new(db)
        .delete_by_event_and_user(event.id, user.id)
        .await?;

    assert!(!removed);

    Ok(())
}
