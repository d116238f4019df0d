use super::*;

/// Tests that camps are listed newest event first without talks by default.
///
/// Expected: Ok with both camps, talks left empty
#[tokio::test]
async fn orders_by_event_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::camp::CampFactory::new(db)
        .event_date(date(2018, 10, 18))
        .build()
        .await?;
    let newer = factory::camp::CampFactory::new(db)
        .event_date(date(2020, 10, 18))
        .build()
        .await?;
    let speaker = factory::create_speaker(db).await?;
    factory::create_talk(db, newer.id, speaker.id).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let camps = repo.get_all_camps(false).await?;

    let monikers: Vec<&str> = camps.iter().map(|c| c.moniker.as_str()).collect();
    assert_eq!(monikers, vec![newer.moniker.as_str(), older.moniker.as_str()]);
    assert!(camps.iter().all(|c| c.talks.is_empty()));

    Ok(())
}

/// Tests eager loading of talks and their speakers.
///
/// Expected: Ok with each camp carrying only its own talks, speakers attached
#[tokio::test]
async fn includes_talks_with_speakers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;
    let empty = factory::create_camp(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let camps = repo.get_all_camps(true).await?;

    let with_talk = camps.iter().find(|c| c.id == camp.id).unwrap();
    assert_eq!(with_talk.talks.len(), 1);
    assert_eq!(with_talk.talks[0].id, talk.id);
    assert_eq!(
        with_talk.talks[0].speaker.as_ref().map(|s| s.id),
        Some(speaker.id)
    );

    let without_talk = camps.iter().find(|c| c.id == empty.id).unwrap();
    assert!(without_talk.talks.is_empty());

    Ok(())
}

/// Tests filtering camps by event date.
///
/// Expected: Ok with only the camp held on the date
#[tokio::test]
async fn filters_by_event_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::camp::CampFactory::new(db)
        .event_date(date(2020, 10, 18))
        .build()
        .await?;
    factory::camp::CampFactory::new(db)
        .event_date(date(2019, 5, 1))
        .build()
        .await?;

    let repo = SeaOrmRepository::new(db.clone());
    let camps = repo
        .get_camps_by_event_date(date(2020, 10, 18), false)
        .await?;

    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0].id, matching.id);

    let none = repo.get_camps_by_event_date(date(2001, 1, 1), false).await?;
    assert!(none.is_empty());

    Ok(())
}
