use super::*;

/// Tests deleting a category.
///
/// Expected: Ok(true) on first delete, Ok(false) once gone
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(stored.id).await?);
    assert!(!repo.delete(stored.id).await?);
    assert!(repo.find_by_id(stored.id).await?.is_none());

    Ok(())
}
