use chrono::Utc;

use tandem_core::middleware::RequestContext;
use tandem_domain::id::UserId;
use tandem_domain::user::UserStatus;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email, validate_name};
use crate::error::UsersServiceError;

fn validate_fields(name: &str, email: &str) -> Result<(), UsersServiceError> {
    if !validate_name(name) {
        return Err(UsersServiceError::Validation("name"));
    }
    if !validate_email(email) {
        return Err(UsersServiceError::Validation("email"));
    }
    Ok(())
}

async fn load_user<R: UserRepository>(
    repo: &R,
    ctx: &RequestContext,
    id: UserId,
) -> Result<User, UsersServiceError> {
    repo.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(request_id = %ctx.request_id, user_id = %id, "user not found");
        UsersServiceError::UserNotFound
    })
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, UsersServiceError> {
        self.repo.find_all().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<User, UsersServiceError> {
        load_user(&self.repo, ctx, user_id).await
    }
}

// ── GetUserByEmail ───────────────────────────────────────────────────────────

pub struct GetUserByEmailUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserByEmailUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<User, UsersServiceError> {
        self.repo.find_by_email(email).await?.ok_or_else(|| {
            tracing::warn!(request_id = %ctx.request_id, email, "user not found by email");
            UsersServiceError::UserNotFound
        })
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub status: Option<UserStatus>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        input: CreateUserInput,
    ) -> Result<User, UsersServiceError> {
        validate_fields(&input.name, &input.email)?;
        if self.repo.exists_by_email(&input.email).await? {
            tracing::warn!(request_id = %ctx.request_id, email = %input.email, "duplicate email on create");
            return Err(UsersServiceError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: input.name,
            email: input.email,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        tracing::info!(request_id = %ctx.request_id, user_id = %user.id, "user created");
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub name: String,
    pub email: String,
    /// Left unchanged when `None`.
    pub status: Option<UserStatus>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        input: UpdateUserInput,
    ) -> Result<User, UsersServiceError> {
        validate_fields(&input.name, &input.email)?;
        let mut user = load_user(&self.repo, ctx, user_id).await?;

        // Uniqueness is only rechecked when the email actually changes.
        if user.email != input.email && self.repo.exists_by_email(&input.email).await? {
            tracing::warn!(request_id = %ctx.request_id, user_id = %user_id, email = %input.email, "duplicate email on update");
            return Err(UsersServiceError::EmailAlreadyExists);
        }

        user.name = input.name;
        user.email = input.email;
        if let Some(status) = input.status {
            user.status = status;
        }
        user.updated_at = Utc::now();
        self.repo.update(&user).await?;
        tracing::info!(request_id = %ctx.request_id, user_id = %user_id, "user updated");
        Ok(user)
    }
}

// ── DeleteUser (soft) ────────────────────────────────────────────────────────

/// Marks the user `INACTIVE`. The row stays, and the user's orders are untouched.
pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<(), UsersServiceError> {
        let mut user = load_user(&self.repo, ctx, user_id).await?;
        user.status = UserStatus::Inactive;
        user.updated_at = Utc::now();
        self.repo.update(&user).await?;
        tracing::info!(request_id = %ctx.request_id, user_id = %user_id, "user deactivated");
        Ok(())
    }
}

// ── CountActiveUsers ─────────────────────────────────────────────────────────

pub struct CountActiveUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CountActiveUsersUseCase<R> {
    pub async fn execute(&self) -> Result<u64, UsersServiceError> {
        self.repo.count_by_status(UserStatus::Active).await
    }
}
