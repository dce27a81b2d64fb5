use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Access requirement checked against the logged-in user.
pub enum Permission {
    /// Staff, manager or admin.
    Staff,
    /// Manager or admin.
    Manager,
    Admin,
    /// The given customer id, or a manager or admin.
    OwnerOrManager(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in user and checks every permission.
    ///
    /// An empty permission list only requires an active, logged-in account.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user was deleted
    /// - `Err(AuthError::AccountInactive)` - The account was deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        authorize(&user, permissions)?;

        Ok(user)
    }
}

/// Checks permissions for a user that is already loaded.
///
/// Used once the resource being accessed is known, e.g. to compare its owner.
pub fn authorize(user: &User, permissions: &[Permission]) -> Result<(), AppError> {
    for permission in permissions {
        let (allowed, requirement) = match permission {
            Permission::Staff => (user.is_staff(), "staff".to_string()),
            Permission::Manager => (user.is_manager(), "manager".to_string()),
            Permission::Admin => (user.is_admin(), "admin".to_string()),
            Permission::OwnerOrManager(owner_id) => (
                user.id == *owner_id || user.is_manager(),
                format!("owner {owner_id} or manager"),
            ),
        };

        if !allowed {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "User with role {} does not meet the {} requirement",
                    user.role, requirement
                ),
            )
            .into());
        }
    }

    Ok(())
}
