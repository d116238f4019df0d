use super::*;

/// Tests listing all speakers in ID order.
///
/// Expected: Ok with every speaker
#[tokio::test]
async fn lists_all_speakers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_speaker(db).await?;
    let second = factory::create_speaker(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let speakers = repo.get_all_speakers().await?;

    let ids: Vec<i32> = speakers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that speakers of a camp are flattened from its talks without duplicates.
///
/// Expected: Ok with each speaker of the camp once, other camps' speakers excluded
#[tokio::test]
async fn lists_distinct_speakers_of_camp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::create_camp(db).await?;
    let other_camp = factory::create_camp(db).await?;
    let busy = factory::create_speaker(db).await?;
    let elsewhere = factory::create_speaker(db).await?;
    factory::create_talk(db, camp.id, busy.id).await?;
    factory::create_talk(db, camp.id, busy.id).await?;
    factory::create_talk(db, other_camp.id, elsewhere.id).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let speakers = repo.get_speakers_by_moniker(&camp.moniker).await?;

    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0].id, busy.id);

    let none = repo.get_speakers_by_moniker("NOPE").await?;
    assert!(none.is_empty());

    Ok(())
}

/// Tests fetching a single speaker.
///
/// Expected: Ok(Some) for an existing ID, Ok(None) otherwise
#[tokio::test]
async fn gets_speaker_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::speaker::SpeakerFactory::new(db)
        .first_name("Ada")
        .company(Some("Analytical Engines"))
        .build()
        .await?;

    let repo = SeaOrmRepository::new(db.clone());
    let speaker = repo.get_speaker(created.id).await?.unwrap();

    assert_eq!(speaker.first_name, "Ada");
    assert_eq!(speaker.company.as_deref(), Some("Analytical Engines"));
    assert!(repo.get_speaker(created.id + 100).await?.is_none());

    Ok(())
}
