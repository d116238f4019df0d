use super::*;

/// Tests inserting a camp.
///
/// Expected: Ok with a generated ID and the given fields
#[tokio::test]
async fn creates_camp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    let camp = repo
        .create_camp("ATL2020".to_string(), camp_fields("Atlanta Code Camp"))
        .await?;

    assert!(camp.id > 0);
    assert_eq!(camp.moniker, "ATL2020");
    assert_eq!(camp.name, "Atlanta Code Camp");
    assert_eq!(camp.event_date, date(2020, 10, 18));
    assert_eq!(camp.location.city_town.as_deref(), Some("Atlanta"));
    assert!(camp.talks.is_empty());

    let count = entity::prelude::Camp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the unique index rejects a second camp with the same moniker.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmRepository::new(db.clone());
    repo.create_camp("ATL2020".to_string(), camp_fields("First"))
        .await?;

    let result = repo
        .create_camp("ATL2020".to_string(), camp_fields("Second"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::Camp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
