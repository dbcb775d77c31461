use super::*;

/// Tests finding a user by exact user name.
///
/// Expected: Ok(Some) for the matching user
#[tokio::test]
async fn finds_user_by_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    UserFactory::new(db).user_name("alice").build().await?;
    let bob = UserFactory::new(db).user_name("bob").build().await?;

    let user = UserRepository::new(db).find_by_natural_key("bob").await?;

    assert_eq!(user.unwrap().id, Some(bob.id));

    Ok(())
}

/// Tests that user name matching is exact.
///
/// Expected: Ok(None) for a different-case or unknown name
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    UserFactory::new(db).user_name("alice").build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_natural_key("not a real user").await?.is_none());
    assert!(repo.find_by_natural_key("alic").await?.is_none());

    Ok(())
}

/// Tests that duplicate user names are not prevented by the table.
///
/// Uniqueness is an application-level check, so the table accepts duplicates and a
/// lookup still returns one of them.
///
/// Expected: Ok(Some) with one of the duplicates
#[tokio::test]
async fn tolerates_duplicate_user_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let first = UserFactory::new(db).user_name("alice").build().await?;
    let second = UserFactory::new(db).user_name("alice").build().await?;

    let user = UserRepository::new(db)
        .find_by_natural_key("alice")
        .await?
        .unwrap();

    let id = user.id.unwrap();
    assert!(id == first.id || id == second.id);

    Ok(())
}
