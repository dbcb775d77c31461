use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let stored = UserFactory::new(db)
        .id("user-1")
        .user_name("alice")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(&stored.id).await?;

    let user = user.unwrap();
    assert_eq!(user.id.as_deref(), Some("user-1"));
    assert_eq!(user.user_name.as_deref(), Some("alice"));

    Ok(())
}

/// Tests finding a user by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    UserFactory::new(db).id("user-1").build().await?;

    let user = UserRepository::new(db).find_by_id("user-3").await?;

    assert!(user.is_none());

    Ok(())
}
