use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with the user no longer found
#[tokio::test]
async fn deletes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let stored = create_user(db).await?;
    let other = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    repo.delete(&stored.id).await?;

    assert!(repo.find_by_id(&stored.id).await?.is_none());
    assert!(repo.find_by_id(&other.id).await?.is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok (no-op)
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let result = UserRepository::new(db).delete("missing").await;

    assert!(result.is_ok());

    Ok(())
}
