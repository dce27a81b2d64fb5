use crate::{
    model::user::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{authorize, AuthGuard, Permission},
            session::AuthSession,
        },
        model::user::User,
    },
};
use entity::prelude::User as UserEntity;
use test_utils::{builder::TestBuilder, factory};
