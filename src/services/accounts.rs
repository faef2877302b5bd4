//! Account service: sign-up/sign-in, admin management and self-service profile

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::account::{
        Account, AccountClaims, CreateAdmin, Role, SignIn, SignUp, UpdatePassword, UpdateProfile,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AccountsService {
    repository: Repository,
    config: AuthConfig,
}

impl AccountsService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new account; duplicate emails surface from the store's unique index
    pub async fn sign_up(&self, dto: SignUp) -> AppResult<Account> {
        let password_hash = self.hash_password(dto.password())?;
        let new_account = dto.into_new_account(password_hash);
        let account = self.repository.accounts.create(&new_account).await?;
        tracing::info!(account_id = %account.id, role = %account.role, "Account created");
        Ok(account)
    }

    /// Authenticate an account of the given role and return a JWT
    pub async fn sign_in(&self, role: Role, dto: &SignIn) -> AppResult<String> {
        let invalid = || AppError::Authentication("Invalid email or password".to_string());

        let account = self
            .repository
            .accounts
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(invalid)?;

        if account.role != role || !self.verify_password(&account, &dto.password)? {
            return Err(invalid());
        }

        self.create_token(&account)
    }

    pub async fn create_admin(&self, dto: CreateAdmin) -> AppResult<Account> {
        self.sign_up(SignUp::Admin(dto)).await
    }

    pub async fn view_all_admins(&self) -> AppResult<Vec<Account>> {
        self.repository.accounts.list_by_role(Role::Admin).await
    }

    pub async fn view_me(&self, id: Uuid) -> AppResult<Account> {
        self.repository
            .accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn save_fcm_token(&self, id: Uuid, token: &str) -> AppResult<Account> {
        self.repository
            .accounts
            .update_fcm_token(id, token)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn update_profile(&self, id: Uuid, profile: &UpdateProfile) -> AppResult<Account> {
        self.repository
            .accounts
            .update_profile(id, profile)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    /// Change password after checking the current one
    pub async fn update_password(&self, id: Uuid, dto: &UpdatePassword) -> AppResult<Account> {
        let account = self.view_me(id).await?;

        if !self.verify_password(&account, &dto.current_password)? {
            return Err(AppError::Authentication("Current password is incorrect".to_string()));
        }

        let password_hash = self.hash_password(&dto.new_password)?;
        self.repository
            .accounts
            .update_password(id, &password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn delete_admin(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.accounts.delete_with_role(id, Role::Admin).await? {
            return Err(AppError::NotFound("Admin not found".to_string()));
        }
        tracing::info!(account_id = %id, "Admin deleted");
        Ok(())
    }

    /// Seed the first admin from configuration if it does not exist yet
    pub async fn ensure_bootstrap_admin(&self) -> AppResult<()> {
        let (Some(email), Some(password)) = (
            self.config.bootstrap_admin_email.clone(),
            self.config.bootstrap_admin_password.clone(),
        ) else {
            return Ok(());
        };

        if self.repository.accounts.find_by_email(&email).await?.is_some() {
            tracing::debug!("Bootstrap admin {} already present", email);
            return Ok(());
        }

        self.create_admin(CreateAdmin {
            name: "Administrator".to_string(),
            email,
            password,
        })
        .await?;
        Ok(())
    }

    fn create_token(&self, account: &Account) -> AppResult<String> {
        AccountClaims::new(account, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn verify_password(&self, account: &Account, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&account.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
