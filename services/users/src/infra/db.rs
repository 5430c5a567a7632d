use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use tandem_domain::id::UserId;
use tandem_domain::user::UserStatus;
use tandem_users_schema::users;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::UsersServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UsersServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UsersServiceError> {
        let count = users::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .context("check user exists by id")?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UsersServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("check user exists by email")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> Result<(), UsersServiceError> {
        users::ActiveModel {
            id: Set(user.id.0),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            status: Set(user.status.as_str().to_owned()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UsersServiceError> {
        users::ActiveModel {
            id: Set(user.id.0),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            status: Set(user.status.as_str().to_owned()),
            updated_at: Set(user.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, "update user"))?;
        Ok(())
    }

    async fn count_by_status(&self, status: UserStatus) -> Result<u64, UsersServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .context("count users by status")?;
        Ok(count)
    }
}

/// Email is the only unique column besides the v7 primary key, so a unique
/// violation on write means a concurrent request claimed the email first.
fn write_error(err: DbErr, op: &'static str) -> UsersServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::warn!(detail = %detail, op, "unique constraint violated");
        return UsersServiceError::EmailAlreadyExists;
    }
    anyhow::Error::new(err).context(op).into()
}

fn user_from_model(model: users::Model) -> Result<User, UsersServiceError> {
    let status = model
        .status
        .parse::<UserStatus>()
        .with_context(|| format!("user {} has unknown status", model.id))?;
    Ok(User {
        id: model.id.into(),
        name: model.name,
        email: model.email,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
