//! Identity service — registration, login, token refresh, sessions
//!
//! All user-facing auth logic lives here. HTTP handlers are thin wrappers
//! that delegate to this service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::{
    CreateRefreshTokenDto, CreateUserDto, DomainError, DomainResult, InfraError,
    RefreshTokenRepositoryInterface, UpdateUserDto, User, UserRepositoryInterface,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::crypto::token::{generate_refresh_token, hash_refresh_token};

/// Client-supplied session metadata captured at login.
#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
}

/// Tokens returned after a successful login or refresh.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    /// Opaque single-use token; only its hash is stored.
    pub refresh_token: String,
    pub user: User,
}

/// Identity service, generic over the user and refresh-token repositories
/// so it stays decoupled from the concrete persistence layer.
pub struct IdentityService<U, R>
where
    U: UserRepositoryInterface,
    R: RefreshTokenRepositoryInterface,
{
    users: Arc<U>,
    refresh_tokens: Arc<R>,
    jwt_config: JwtConfig,
    refresh_token_days: i64,
}

impl<U, R> IdentityService<U, R>
where
    U: UserRepositoryInterface,
    R: RefreshTokenRepositoryInterface,
{
    pub fn new(users: Arc<U>, refresh_tokens: Arc<R>, jwt_config: JwtConfig) -> Self {
        Self {
            users,
            refresh_tokens,
            jwt_config,
            refresh_token_days: 30,
        }
    }

    // ── Registration ────────────────────────────────────────────

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        if username.len() < 3 || username.len() > 50 {
            return Err(DomainError::Validation(
                "Username must be 3-50 characters".into(),
            ));
        }
        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }

        if self.users.get_user_by_username(username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }
        if self.users.get_user_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Infra(InfraError::Crypto(e.to_string())))?;

        let user = self
            .users
            .create_user(
                CreateUserDto {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
                password_hash,
            )
            .await?;

        info!(user_id = %user.id, username = %user.username, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by username or email and mint an access + refresh
    /// token pair. Device metadata is stored with the session.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        device: DeviceInfo,
    ) -> DomainResult<AuthResult> {
        let user = self
            .users
            .get_user_by_username(username_or_email)
            .await?
            .or(self.users.get_user_by_email(username_or_email).await?);

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };
        if !user.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        self.users.touch_last_login(&user.id).await?;
        self.issue_tokens(user, device).await
    }

    /// Exchange a refresh token for a new token pair. Tokens are
    /// single-use: the presented one is revoked on success.
    pub async fn refresh(&self, raw_token: &str, device: DeviceInfo) -> DomainResult<AuthResult> {
        let hash = hash_refresh_token(raw_token);
        let stored = self
            .refresh_tokens
            .find_by_hash(&hash)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid refresh token".into()))?;

        if !stored.is_usable(Utc::now()) {
            return Err(DomainError::Unauthorized(
                "Refresh token expired or revoked".into(),
            ));
        }

        let user = self
            .users
            .get_user_by_id(&stored.user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid refresh token".into()))?;
        if !user.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        self.refresh_tokens.revoke_token(&stored.id).await?;
        self.issue_tokens(user, device).await
    }

    /// Revoke the session behind a refresh token. Unknown tokens are a
    /// no-op so logout never leaks token validity.
    pub async fn logout(&self, raw_token: &str) -> DomainResult<()> {
        let hash = hash_refresh_token(raw_token);
        if let Some(stored) = self.refresh_tokens.find_by_hash(&hash).await? {
            self.refresh_tokens.revoke_token(&stored.id).await?;
            info!(user_id = %stored.user_id, "Session revoked");
        }
        Ok(())
    }

    async fn issue_tokens(&self, user: User, device: DeviceInfo) -> DomainResult<AuthResult> {
        let access_token = create_token(&user.id, &user.username, &self.jwt_config)
            .map_err(|e| DomainError::Infra(InfraError::Crypto(e.to_string())))?;

        let refresh_token = generate_refresh_token();
        self.refresh_tokens
            .insert_token(CreateRefreshTokenDto {
                user_id: user.id.clone(),
                token_hash: hash_refresh_token(&refresh_token),
                device_name: device.device_name,
                user_agent: device.user_agent,
                expires_at: Utc::now() + Duration::days(self.refresh_token_days),
            })
            .await?;

        Ok(AuthResult {
            access_token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            refresh_token,
            user,
        })
    }

    // ── Profile ─────────────────────────────────────────────────

    pub async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.users.get_user_by_id(id).await
    }

    pub async fn update_profile(&self, id: &str, dto: UpdateUserDto) -> DomainResult<User> {
        if let Some(username) = &dto.username {
            if username.len() < 3 || username.len() > 50 {
                return Err(DomainError::Validation(
                    "Username must be 3-50 characters".into(),
                ));
            }
            if let Some(existing) = self.users.get_user_by_username(username).await? {
                if existing.id != id {
                    return Err(DomainError::Conflict("Username already exists".into()));
                }
            }
        }
        if let Some(email) = &dto.email {
            if !email.contains('@') {
                return Err(DomainError::Validation("Invalid email address".into()));
            }
            if let Some(existing) = self.users.get_user_by_email(email).await? {
                if existing.id != id {
                    return Err(DomainError::Conflict("Email already exists".into()));
                }
            }
        }

        self.users
            .update_user(id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Change the password and revoke every open session.
    pub async fn change_password(
        &self,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let user = self
            .users
            .get_user_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized(
                "Current password is incorrect".into(),
            ));
        }
        if new_password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| DomainError::Infra(InfraError::Crypto(e.to_string())))?;
        self.users.update_user_password(id, &new_hash).await?;

        let revoked = self.refresh_tokens.revoke_all_for_user(id).await?;
        info!(user_id = id, revoked_sessions = revoked, "Password changed");
        Ok(())
    }
}
