use super::*;

/// Tests deleting a setting by key.
///
/// Expected: Ok(true) for a stored key, Ok(false) afterwards
#[tokio::test]
async fn deletes_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert(UpsertSettingParams {
        key: "currency_symbol".to_string(),
        value: "GH₵".to_string(),
        description: None,
    })
    .await?;

    assert!(repo.delete("currency_symbol").await?);
    assert!(!repo.delete("currency_symbol").await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
