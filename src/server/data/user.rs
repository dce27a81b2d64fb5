//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating, querying and updating accounts, converting
//! between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateProfileParams, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active user.
    ///
    /// The caller is responsible for checking email uniqueness first; a duplicate email
    /// surfaces as a database error from the unique index.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by exact email address.
    ///
    /// Emails are stored lower-cased, so callers should normalise before looking up.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether an admin bootstrap code is needed.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Sets whether the account may log in.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Changes the user's role.
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.role = ActiveValue::Set(role.as_str().to_string());
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }
}
