use super::*;

/// Tests deleting an unreferenced speaker.
///
/// Expected: Ok with the speaker removed
#[tokio::test]
async fn deletes_unreferenced_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let speaker = factory::create_speaker(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    repo.delete_speaker(speaker.id).await?;

    assert!(repo.get_speaker(speaker.id).await?.is_none());

    Ok(())
}

/// Tests that a speaker referenced by a talk cannot be deleted.
///
/// Expected: Err with a foreign key violation, speaker and talk kept
#[tokio::test]
async fn rejects_speaker_with_talks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let err = repo.delete_speaker(speaker.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.get_speaker(speaker.id).await?.is_some());
    assert!(entity::prelude::Talk::find_by_id(talk.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
