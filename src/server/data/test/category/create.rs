use super::*;

/// Tests creating a category and reading it back by id and slug.
///
/// Expected: Ok(Category) active by default, findable by both keys
#[tokio::test]
async fn creates_active_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Main Course".to_string(),
            description: Some("Hearty plates".to_string()),
            slug: "main-course".to_string(),
        })
        .await?;

    assert!(category.is_active);
    assert_eq!(repo.find_by_id(category.id).await?, Some(category.clone()));
    assert_eq!(repo.find_by_slug("main-course").await?, Some(category));
    assert!(repo.find_by_slug("desserts").await?.is_none());

    Ok(())
}
