use super::*;

/// Tests deleting a talk leaves its camp and speaker in place.
///
/// Expected: Ok with only the talk removed
#[tokio::test]
async fn deletes_only_the_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    repo.delete_talk(talk.id).await?;

    assert!(repo
        .get_talk_by_moniker(&camp.moniker, talk.id, false)
        .await?
        .is_none());
    assert!(repo.get_camp(&camp.moniker, false).await?.is_some());
    assert!(repo.get_speaker(speaker.id).await?.is_some());

    Ok(())
}
