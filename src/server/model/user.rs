//! User domain models and parameters.
//!
//! Users are customers and restaurant staff. The stored role decides which endpoints a
//! user may reach; the password hash never leaves the server.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UpdateProfileDto, UserDto, UserRole},
    server::{error::AppError, model::Page, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone: entity.phone,
            password_hash: entity.password_hash,
            role: parse_stored("role", entity.role)?,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Staff, managers and admins.
    pub fn is_staff(&self) -> bool {
        self.role >= UserRole::Staff
    }

    /// Managers and admins.
    pub fn is_manager(&self) -> bool {
        self.role >= UserRole::Manager
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl Page<User> {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let total_pages = self.total_pages();
        PaginatedUsersDto {
            users: self.items.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Parameters for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

/// Parameters for registering through the public endpoint.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password: String,
    pub admin_code: Option<String>,
}

impl From<crate::model::user::RegisterDto> for RegisterParams {
    fn from(dto: crate::model::user::RegisterDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            phone: dto.phone,
            password: dto.password,
            admin_code: dto.admin_code,
        }
    }
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateProfileDto> for UpdateProfileParams {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
        }
    }
}
