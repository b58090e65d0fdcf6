use super::*;

/// Tests creating a fresh signup.
///
/// Expected: Ok(Signup) with stored status
#[tokio::test]
async fn inserts_a_new_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let event = EventFactory::new(db, user.id).build().await?;

    let signup = EventSignupRepository::new(db)
        .upsert(upsert_params(event.id, user.id, SignupStatus::Tentative))
        .await?;

    assert_eq!(signup.event_id, event.id);
    assert_eq!(signup.user_id, user.id);
    assert_eq!(signup.status, SignupStatus::Tentative);

    Ok(())
}

/// Tests replacing an existing signup.
///
/// Expected: one row per (event, user), carrying the latest status while
/// keeping the original creation time
#[tokio::test]
async fn replaces_the_existing_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let event = EventFactory::new(db, user.id).build().await?;

    let repo = EventSignupRepository::new(db);
    let first = repo
        .upsert(upsert_params(event.id, user.id, SignupStatus::Tentative))
        .await?;
    let second = repo
        .upsert(upsert_params(event.id, user.id, SignupStatus::Confirmed))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, SignupStatus::Confirmed);
    assert_eq!(second.created_at, first.created_at);

    let all = repo.get_ranked_by_event(event.id, None).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
