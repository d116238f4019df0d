use super::*;

/// Tests overwriting the writable fields of a camp.
///
/// Expected: Ok with new fields, moniker unchanged, talks kept in the store
#[tokio::test]
async fn overwrites_fields_and_keeps_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, _, _) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SeaOrmRepository::new(db.clone());
    let mut fields = camp_fields("Renamed Camp");
    fields.length = 3;

    let updated = repo.update_camp(camp.id, fields).await?;

    assert_eq!(updated.moniker, camp.moniker);
    assert_eq!(updated.name, "Renamed Camp");
    assert_eq!(updated.length, 3);
    assert_eq!(updated.location.city_town.as_deref(), Some("Atlanta"));

    let reloaded = repo.get_camp(&camp.moniker, true).await?.unwrap();
    assert_eq!(reloaded.name, "Renamed Camp");
    assert_eq!(reloaded.talks.len(), 1);

    Ok(())
}

/// Tests updating a camp that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_camp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    let result = repo.update_camp(999, camp_fields("Ghost")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
