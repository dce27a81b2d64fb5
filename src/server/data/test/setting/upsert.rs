use super::*;

/// Tests creating a new setting.
///
/// Expected: Ok(Setting) listed by `get_all`
#[tokio::test]
async fn creates_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let setting = repo
        .upsert(UpsertSettingParams {
            key: "opening_hours".to_string(),
            value: "17:00-22:00".to_string(),
            description: Some("Dinner service".to_string()),
        })
        .await?;

    assert_eq!(setting.value, "17:00-22:00");
    assert_eq!(repo.get_all().await?, vec![setting]);

    Ok(())
}

/// Tests that upserting an existing key replaces its value in place.
///
/// Expected: a single row with the new value and the original creation time
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let first = repo
        .upsert(UpsertSettingParams {
            key: "max_party_size".to_string(),
            value: "8".to_string(),
            description: None,
        })
        .await?;
    let second = repo
        .upsert(UpsertSettingParams {
            key: "max_party_size".to_string(),
            value: "10".to_string(),
            description: Some("Largest table".to_string()),
        })
        .await?;

    assert_eq!(second.value, "10");
    assert_eq!(second.description.as_deref(), Some("Largest table"));
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(repo.get_all().await?.len(), 1);
    assert_eq!(
        repo.find_by_key("max_party_size").await?.map(|s| s.value),
        Some("10".to_string())
    );

    Ok(())
}
