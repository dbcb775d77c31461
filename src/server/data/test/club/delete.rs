use super::*;

/// Tests deleting an existing club.
///
/// Expected: Ok with the club no longer found
#[tokio::test]
async fn deletes_existing_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let stored = create_club(db).await?;

    let repo = ClubRepository::new(db);
    repo.delete(&stored.id).await?;

    assert!(repo.find_by_id(&stored.id).await?.is_none());

    Ok(())
}
