use super::*;

/// Tests overwriting the writable fields of a speaker.
///
/// Expected: Ok with the new values, optional fields cleared when absent
#[tokio::test]
async fn overwrites_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::speaker::SpeakerFactory::new(db)
        .company(Some("Old Company"))
        .build()
        .await?;

    let repo = SeaOrmRepository::new(db.clone());
    let mut fields = speaker_fields("Grace", "Hopper");
    fields.company = None;

    let updated = repo.update_speaker(created.id, fields).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Hopper");
    assert!(updated.company.is_none());

    Ok(())
}

/// Tests updating a speaker that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    let result = repo
        .update_speaker(42, speaker_fields("Grace", "Hopper"))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
