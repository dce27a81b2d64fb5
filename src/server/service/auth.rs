//! Account registration and password login.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, RegisterParams, User},
        service::{admin::code::AdminCodeService, validate},
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_code_service: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admin_code_service` - Holder of the one-time admin bootstrap code
    pub fn new(db: &'a DatabaseConnection, admin_code_service: &'a AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
        }
    }

    /// Registers a new account.
    ///
    /// Validates the input, rejects duplicate emails, and hashes the password with argon2.
    /// The account is a customer unless a valid admin code is presented, in which case it
    /// is created as an admin and the code is consumed. The code is only checked after
    /// every other validation passes so a rejected registration never burns it.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid field or invalid/expired admin code
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let email = validate::email(&params.email)?;
        let name = validate::required(&params.name, "Name")?;
        let phone = params
            .phone
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
            .map(validate::phone)
            .transpose()?;
        validate::password(&params.password)?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let role = match params.admin_code.as_deref() {
            Some(code) if !code.trim().is_empty() => {
                if !self.admin_code_service.validate_and_consume(code).await {
                    return Err(AppError::BadRequest(
                        "Invalid or expired admin code".to_string(),
                    ));
                }
                UserRole::Admin
            }
            _ => UserRole::Customer,
        };

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                email,
                name,
                phone,
                password_hash,
                role,
            })
            .await?;

        if user.role == UserRole::Admin {
            tracing::info!("Admin account {} created with bootstrap code", user.id);
        }

        Ok(user)
    }

    /// Verifies an email/password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account active
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::AuthErr(AccountInactive))` - Account has been deactivated
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        Ok(user)
    }
}
