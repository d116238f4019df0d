use super::*;

/// Tests looking up a camp by moniker.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_camp_by_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db)
        .moniker("ATL2020")
        .venue_name(Some("Atlanta Convention Center"))
        .build()
        .await?;

    let repo = SeaOrmRepository::new(db.clone());
    let camp = repo.get_camp("ATL2020", false).await?.unwrap();

    assert_eq!(camp.id, created.id);
    assert_eq!(camp.name, created.name);
    assert_eq!(
        camp.location.venue_name.as_deref(),
        Some("Atlanta Convention Center")
    );

    Ok(())
}

/// Tests that an unknown moniker yields no camp.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_camp(db).await?;

    let repo = SeaOrmRepository::new(db.clone());

    assert!(repo.get_camp("NOPE", true).await?.is_none());

    Ok(())
}

/// Tests that talks are loaded for a single camp when requested.
///
/// Expected: Ok(Some) with talks only when include_talks is set
#[tokio::test]
async fn includes_talks_on_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, _, _) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SeaOrmRepository::new(db.clone());

    let bare = repo.get_camp(&camp.moniker, false).await?.unwrap();
    assert!(bare.talks.is_empty());

    let full = repo.get_camp(&camp.moniker, true).await?.unwrap();
    assert_eq!(full.talks.len(), 1);
    assert!(full.talks[0].speaker.is_some());

    Ok(())
}
