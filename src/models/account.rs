//! Account model, roles and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organiser,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organiser => "organiser",
            Role::Customer => "customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "organiser" => Ok(Role::Organiser),
            "customer" => Ok(Role::Customer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// Stored as TEXT
impl sqlx::Type<Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Role {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Role {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Account record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    pub registration_number: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    /// Push-notification device token
    #[serde(skip_serializing)]
    pub fcm_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload handed to the store, password already hashed
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    pub registration_number: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
}

impl NewAccount {
    fn new(email: String, password_hash: String, role: Role, name: String) -> Self {
        Self {
            email,
            password_hash,
            role,
            name,
            phone_number: None,
            address: None,
            business_name: None,
            business_category: None,
            registration_number: None,
            website_url: None,
            facebook_url: None,
        }
    }
}

/// Customer sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerSignUp {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Organiser sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrganiserSignUp {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,
    #[validate(length(min = 1, message = "Business category is required"))]
    pub business_category: String,
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub registration_number: String,
    pub phone_number: Option<String>,
    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,
    #[validate(url(message = "Invalid facebook URL"))]
    pub facebook_url: Option<String>,
}

/// Admin creation request (issued by another admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdmin {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Account creation request in any of its shapes
#[derive(Debug)]
pub enum SignUp {
    Customer(CustomerSignUp),
    Organiser(OrganiserSignUp),
    Admin(CreateAdmin),
}

impl SignUp {
    pub fn password(&self) -> &str {
        match self {
            SignUp::Customer(dto) => &dto.password,
            SignUp::Organiser(dto) => &dto.password,
            SignUp::Admin(dto) => &dto.password,
        }
    }

    /// Build the insert payload, consuming the plaintext password
    pub fn into_new_account(self, password_hash: String) -> NewAccount {
        match self {
            SignUp::Customer(dto) => NewAccount {
                phone_number: dto.phone_number,
                address: dto.address,
                ..NewAccount::new(dto.email, password_hash, Role::Customer, dto.name)
            },
            SignUp::Organiser(dto) => NewAccount {
                email: dto.email,
                password_hash,
                role: Role::Organiser,
                name: dto.name,
                phone_number: dto.phone_number,
                address: Some(dto.address),
                business_name: Some(dto.business_name),
                business_category: Some(dto.business_category),
                registration_number: Some(dto.registration_number),
                website_url: dto.website_url,
                facebook_url: dto.facebook_url,
            },
            SignUp::Admin(dto) => {
                NewAccount::new(dto.email, password_hash, Role::Admin, dto.name)
            }
        }
    }
}

/// Sign-in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignIn {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access_token: String,
}

/// Update own profile request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfile {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,
    #[validate(url(message = "Invalid facebook URL"))]
    pub facebook_url: Option<String>,
}

/// Change own password request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePassword {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Push-notification token registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveFcmToken {
    /// Device token
    #[schema(example = "your-device-id")]
    #[validate(length(min = 1, max = 512, message = "Token must be 1-512 characters"))]
    pub token: String,
}

/// JWT claims for authenticated accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountClaims {
    /// Account id
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl AccountClaims {
    pub fn new(account: &Account, expiration_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: account.id,
            email: account.email.clone(),
            role: account.role,
            exp: now + (expiration_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Role gate: an empty `allowed` set admits any authenticated role
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.is_empty() || allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Role '{}' is not allowed to access this resource",
                self.role
            )))
        }
    }
}
