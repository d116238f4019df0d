use super::*;

/// Tests inserting a speaker.
///
/// Expected: Ok with a generated ID and the given fields
#[tokio::test]
async fn creates_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    let speaker = repo
        .create_speaker(speaker_fields("Shawn", "Wildermuth"))
        .await?;

    assert!(speaker.id > 0);
    assert_eq!(speaker.first_name, "Shawn");
    assert_eq!(speaker.twitter.as_deref(), Some("@shawnwildermuth"));
    assert_eq!(entity::prelude::Speaker::find().count(db).await?, 1);

    Ok(())
}
