use super::*;

/// Tests finding a club by exact club name.
///
/// Expected: Ok(Some) for the matching club, Ok(None) otherwise
#[tokio::test]
async fn finds_club_by_club_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let north_down = ClubFactory::new(db).club_name("North Down").build().await?;
    ClubFactory::new(db).club_name("Big girls Bingo").build().await?;

    let repo = ClubRepository::new(db);

    let club = repo.find_by_natural_key("North Down").await?;
    assert_eq!(club.unwrap().id, Some(north_down.id));

    assert!(repo.find_by_natural_key("Not a real club").await?.is_none());

    Ok(())
}
