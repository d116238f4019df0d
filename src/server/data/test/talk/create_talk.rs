use super::*;

/// Tests inserting a talk for an existing camp and speaker.
///
/// Expected: Ok with the speaker loaded
#[tokio::test]
async fn creates_talk_with_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::create_camp(db).await?;
    let speaker = factory::create_speaker(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let talk = repo
        .create_talk(camp.id, speaker.id, talk_fields("Intro to Rust"))
        .await?;

    assert!(talk.id > 0);
    assert_eq!(talk.camp_id, camp.id);
    assert_eq!(talk.title, "Intro to Rust");
    assert_eq!(talk.level, 200);
    assert_eq!(talk.speaker.map(|s| s.id), Some(speaker.id));

    Ok(())
}

/// Tests that a talk cannot reference a speaker that does not exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_unknown_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::create_camp(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let err = repo
        .create_talk(camp.id, 999, talk_fields("Orphan"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 0);

    Ok(())
}
