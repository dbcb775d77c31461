use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let users = UserRepository::new(db).find_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing every stored user.
///
/// Expected: Ok with both users present
#[tokio::test]
async fn returns_all_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    UserFactory::new(db).user_name("alice").build().await?;
    UserFactory::new(db).user_name("bob").build().await?;

    let users = UserRepository::new(db).find_all().await?;

    assert_eq!(users.len(), 2);
    let mut names: Vec<_> = users.into_iter().filter_map(|u| u.user_name).collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);

    Ok(())
}
