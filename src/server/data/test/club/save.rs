use super::*;

/// Tests saving a transient club built with `Club::new`.
///
/// Expected: Ok with an id assigned and the admin as the only member
#[tokio::test]
async fn assigns_id_to_new_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ClubRepository::new(db);
    let saved = repo.save(Club::new("North Down", "darren")).await?;

    let id = saved.id.clone().unwrap();
    assert_eq!(saved.member_ids, vec!["darren"]);
    assert_eq!(repo.find_by_id(&id).await?, Some(saved));

    Ok(())
}

/// Tests that saving over an existing id replaces the whole row.
///
/// Expected: Ok with all columns replaced, still one row
#[tokio::test]
async fn replaces_existing_club() -> Result<(), AppError> {
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
        .member_ids(["darren", "hollie"])
        .build()
        .await?;

    let repo = ClubRepository::new(db);
    let saved = repo
        .save(Club {
            id: Some("club-1".to_string()),
            club_name: Some("North Down FC".to_string()),
            admin_id: None,
            member_ids: vec![],
        })
        .await?;

    assert_eq!(saved.club_name.as_deref(), Some("North Down FC"));
    assert_eq!(saved.admin_id, None);
    assert!(saved.member_ids.is_empty());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
