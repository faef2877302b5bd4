//! Accounts repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::account::{Account, NewAccount, Role, UpdateProfile},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsStore: Send + Sync {
    async fn create(&self, account: &NewAccount) -> AppResult<Account>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>>;
    async fn update_profile(&self, id: Uuid, profile: &UpdateProfile) -> AppResult<Option<Account>>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<Option<Account>>;
    async fn update_fcm_token(&self, id: Uuid, token: &str) -> AppResult<Option<Account>>;
    /// Delete only if the account carries `role`; returns whether a row went away
    async fn delete_with_role(&self, id: Uuid, role: Role) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct AccountsRepository {
    pool: Pool<Postgres>,
}

impl AccountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountsStore for AccountsRepository {
    async fn create(&self, account: &NewAccount) -> AppResult<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (
                email, password, role, name, phone_number, address,
                business_name, business_category, registration_number,
                website_url, facebook_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role)
        .bind(&account.name)
        .bind(&account.phone_number)
        .bind(&account.address)
        .bind(&account.business_name)
        .bind(&account.business_category)
        .bind(&account.registration_number)
        .bind(&account.website_url)
        .bind(&account.facebook_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE role = $1 ORDER BY created_at",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update_profile(&self, id: Uuid, profile: &UpdateProfile) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts SET
                name = COALESCE($2, name),
                phone_number = COALESCE($3, phone_number),
                address = COALESCE($4, address),
                business_name = COALESCE($5, business_name),
                business_category = COALESCE($6, business_category),
                website_url = COALESCE($7, website_url),
                facebook_url = COALESCE($8, facebook_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&profile.name)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(&profile.business_name)
        .bind(&profile.business_category)
        .bind(&profile.website_url)
        .bind(&profile.facebook_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            "UPDATE accounts SET password = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_fcm_token(&self, id: Uuid, token: &str) -> AppResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            "UPDATE accounts SET fcm_token = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_with_role(&self, id: Uuid, role: Role) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1 AND role = $2")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
