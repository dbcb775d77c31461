use super::*;

/// Tests listing clubs from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let clubs = ClubRepository::new(db).find_all().await?;

    assert!(clubs.is_empty());

    Ok(())
}

/// Tests listing every stored club with decoded member lists.
///
/// Expected: Ok with both clubs and their members
#[tokio::test]
async fn returns_all_clubs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    ClubFactory::new(db)
        .club_name("North Down")
        .admin_id("darren")
        .build()
        .await?;
    ClubFactory::new(db)
        .club_name("Big girls Bingo")
        .admin_id("hollie")
        .member_ids(["hollie", "darren"])
        .build()
        .await?;

    let mut clubs = ClubRepository::new(db).find_all().await?;
    clubs.sort_by(|a, b| a.club_name.cmp(&b.club_name));

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].club_name.as_deref(), Some("Big girls Bingo"));
    assert_eq!(clubs[0].member_ids, vec!["hollie", "darren"]);
    assert_eq!(clubs[1].member_ids, vec!["darren"]);

    Ok(())
}
