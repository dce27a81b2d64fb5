//! Profile and account management.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            user::{UpdateProfileParams, User},
            Page,
        },
        service::validate,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Lists every user, active or not, by name.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page {
            items: users,
            total,
            page,
            per_page,
        })
    }

    /// Updates the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Invalid name, phone or email
    /// - `Err(AppError::Conflict)` - Email belongs to another account
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = match params.email.as_deref() {
            Some(email) => {
                let email = validate::email(email)?;
                if let Some(existing) = repo.find_by_email(&email).await? {
                    if existing.id != id {
                        return Err(AppError::Conflict("Email already registered".to_string()));
                    }
                }
                Some(email)
            }
            None => None,
        };

        let params = UpdateProfileParams {
            name: params
                .name
                .as_deref()
                .map(|name| validate::required(name, "Name"))
                .transpose()?,
            phone: params.phone.as_deref().map(validate::phone).transpose()?,
            email,
        };

        repo.update_profile(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Flips whether an account may log in.
    ///
    /// # Arguments
    /// - `actor_id` - Admin performing the change
    /// - `target_id` - Account to toggle
    ///
    /// # Returns
    /// - `Ok(User)` - Account with its new active flag
    /// - `Err(AppError::BadRequest)` - Admin tried to toggle their own account
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn toggle_active(&self, actor_id: i32, target_id: i32) -> Result<User, AppError> {
        if actor_id == target_id {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let user = self.get(target_id).await?;

        let user = repo
            .set_active(target_id, !user.is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} set account {} active={}",
            actor_id,
            user.id,
            user.is_active
        );

        Ok(user)
    }

    /// Changes an account's role.
    ///
    /// # Returns
    /// - `Ok(User)` - Account with its new role
    /// - `Err(AppError::BadRequest)` - Admin tried to demote themselves
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(
        &self,
        actor_id: i32,
        target_id: i32,
        role: UserRole,
    ) -> Result<User, AppError> {
        if actor_id == target_id && role != UserRole::Admin {
            return Err(AppError::BadRequest(
                "You cannot remove your own admin role".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_role(target_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} set role of {} to {}", actor_id, user.id, role);

        Ok(user)
    }
}
