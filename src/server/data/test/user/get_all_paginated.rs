use super::*;

/// Tests paging through users ordered by name.
///
/// Expected: first page holds the two alphabetically first users, total counts all
#[tokio::test]
async fn pages_users_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|user| user.name.as_str()).collect::<Vec<_>>(),
        vec!["Alice", "Bob"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Charlie");

    Ok(())
}

/// Tests paging an empty table.
///
/// Expected: Ok((vec![], 0))
#[tokio::test]
async fn returns_empty_page_without_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
