use super::*;

/// Tests saving a transient user.
///
/// Verifies that the repository assigns an id to a user without one and the stored
/// row can be read back.
///
/// Expected: Ok with a fresh id assigned
#[tokio::test]
async fn assigns_id_to_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let saved = repo.save(User::new("alice")).await?;

    let id = saved.id.clone().unwrap();
    assert!(!id.is_empty());
    assert_eq!(repo.find_by_id(&id).await?, Some(saved));

    Ok(())
}

/// Tests saving a user with a caller-provided id.
///
/// Expected: Ok with the id preserved
#[tokio::test]
async fn keeps_provided_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let saved = UserRepository::new(db)
        .save(User {
            id: Some("user-1".to_string()),
            user_name: Some("alice".to_string()),
            password: None,
        })
        .await?;

    assert_eq!(saved.id.as_deref(), Some("user-1"));

    Ok(())
}

/// Tests that saving over an existing id replaces the whole row.
///
/// Fields missing from the new user are cleared rather than carried over.
///
/// Expected: Ok with name replaced and password cleared, still one row
#[tokio::test]
async fn replaces_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    UserFactory::new(db)
        .id("user-1")
        .user_name("alice")
        .password("digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let saved = repo
        .save(User {
            id: Some("user-1".to_string()),
            user_name: Some("alicia".to_string()),
            password: None,
        })
        .await?;

    assert_eq!(saved.user_name.as_deref(), Some("alicia"));
    assert_eq!(saved.password, None);
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
