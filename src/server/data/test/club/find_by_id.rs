use super::*;

/// Tests finding an existing club by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    ClubFactory::new(db)
        .id("club-1")
        .club_name("North Down")
        .admin_id("darren")
        .build()
        .await?;

    let club = ClubRepository::new(db).find_by_id("club-1").await?.unwrap();

    assert_eq!(club.club_name.as_deref(), Some("North Down"));
    assert_eq!(club.admin_id.as_deref(), Some("darren"));
    assert_eq!(club.member_ids, vec!["darren"]);

    Ok(())
}

/// Tests finding a club by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    ClubFactory::new(db).id("club-1").build().await?;

    let club = ClubRepository::new(db).find_by_id("club-3").await?;

    assert!(club.is_none());

    Ok(())
}

/// Tests reading a row whose member list is not valid JSON.
///
/// Expected: Err(InternalErr(MalformedMemberIds))
#[tokio::test]
async fn fails_on_malformed_member_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    ClubFactory::new(db)
        .id("club-1")
        .raw_member_ids("darren,hollie")
        .build()
        .await?;

    let result = ClubRepository::new(db).find_by_id("club-1").await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::MalformedMemberIds { .. }))
    ));

    Ok(())
}
