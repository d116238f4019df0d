use super::*;

/// Tests overwriting talk fields and moving it to another speaker.
///
/// Expected: Ok with new fields and the new speaker loaded
#[tokio::test]
async fn overwrites_fields_and_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, _, talk) = factory::helpers::create_talk_with_dependencies(db).await?;
    let replacement = factory::create_speaker(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let updated = repo
        .update_talk(talk.id, talk_fields("Advanced Rust"), Some(replacement.id))
        .await?;

    assert_eq!(updated.id, talk.id);
    assert_eq!(updated.camp_id, camp.id);
    assert_eq!(updated.title, "Advanced Rust");
    assert_eq!(updated.speaker.map(|s| s.id), Some(replacement.id));

    Ok(())
}

/// Tests that the speaker is kept when none is given.
///
/// Expected: Ok with the original speaker
#[tokio::test]
async fn keeps_speaker_when_not_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let updated = repo
        .update_talk(talk.id, talk_fields("Retitled"), None)
        .await?;

    assert_eq!(updated.speaker_id, speaker.id);

    Ok(())
}

/// Tests updating a talk that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    let result = repo.update_talk(7, talk_fields("Ghost"), None).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
