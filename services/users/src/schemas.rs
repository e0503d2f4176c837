//! Request and response schemas for the users API
//!
//! Raw payloads deserialize into the request types here, then validate
//! into the typed values the repositories consume (`NewUser`,
//! `UserUpdate`, `Role`). Validation composes the field validators from
//! [`crate::validation`] and reports failures as [`ValidationError`]
//! with field attribution where one applies.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{NewUser, Role, User, UserUpdate};
use crate::nickname::generate_nickname;
use crate::validation::{validate_email, validate_nickname, validate_password, validate_url};

/// Request for public user registration
///
/// Role is not accepted here; registered users always start as
/// `AUTHENTICATED`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
}

impl RegisterRequest {
    pub fn validate(self, rng: &mut impl Rng) -> Result<NewUser, ValidationError> {
        build_new_user(
            self.email,
            self.password,
            self.nickname,
            self.first_name,
            self.last_name,
            self.bio,
            self.profile_picture_url,
            self.linkedin_profile_url,
            self.github_profile_url,
            Role::Authenticated,
            rng,
        )
    }
}

/// Request for administrative user creation
///
/// Unlike registration, the role is required and explicit.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self, rng: &mut impl Rng) -> Result<NewUser, ValidationError> {
        let role = match self.role {
            Some(ref label) => Role::parse(label)
                .map_err(|message| ValidationError::invalid_format("role", message))?,
            None => {
                return Err(ValidationError::invalid_format("role", "Role is required"));
            }
        };

        build_new_user(
            self.email,
            self.password,
            self.nickname,
            self.first_name,
            self.last_name,
            self.bio,
            self.profile_picture_url,
            self.linkedin_profile_url,
            self.github_profile_url,
            role,
            rng,
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn build_new_user(
    email: String,
    password: String,
    nickname: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    profile_picture_url: Option<String>,
    linkedin_profile_url: Option<String>,
    github_profile_url: Option<String>,
    role: Role,
    rng: &mut impl Rng,
) -> Result<NewUser, ValidationError> {
    validate_email(&email).map_err(|m| ValidationError::invalid_format("email", m))?;
    validate_password(&password).map_err(|m| ValidationError::invalid_format("password", m))?;

    // Generator output satisfies the nickname rules by construction and is
    // not re-validated.
    let nickname = match nickname {
        Some(nickname) => {
            validate_nickname(&nickname)
                .map_err(|m| ValidationError::invalid_format("nickname", m))?;
            nickname
        }
        None => generate_nickname(rng),
    };

    check_url("profile_picture_url", profile_picture_url.as_deref())?;
    check_url("linkedin_profile_url", linkedin_profile_url.as_deref())?;
    check_url("github_profile_url", github_profile_url.as_deref())?;

    Ok(NewUser {
        email,
        password,
        nickname,
        first_name,
        last_name,
        bio,
        profile_picture_url,
        linkedin_profile_url,
        github_profile_url,
        role,
    })
}

fn check_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(url) => validate_url(url).map_err(|m| ValidationError::invalid_format(field, m)),
        None => Ok(()),
    }
}

/// Request for partial profile updates
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// Validate the update as a whole, then each present field.
    ///
    /// The emptiness rule deliberately ignores `role`: a packet carrying
    /// only `role` is rejected here, and role changes go through the
    /// dedicated role-update operation instead.
    pub fn validate(self) -> Result<UserUpdate, ValidationError> {
        let any_field_provided = [
            &self.email,
            &self.nickname,
            &self.first_name,
            &self.last_name,
            &self.bio,
            &self.profile_picture_url,
            &self.linkedin_profile_url,
            &self.github_profile_url,
        ]
        .iter()
        .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()));

        if !any_field_provided {
            return Err(ValidationError::invalid_input(
                "At least one field must be provided for update",
            ));
        }

        if let Some(ref email) = self.email {
            validate_email(email).map_err(|m| ValidationError::invalid_format("email", m))?;
        }
        if let Some(ref nickname) = self.nickname {
            validate_nickname(nickname)
                .map_err(|m| ValidationError::invalid_format("nickname", m))?;
        }
        check_url("profile_picture_url", self.profile_picture_url.as_deref())?;
        check_url("linkedin_profile_url", self.linkedin_profile_url.as_deref())?;
        check_url("github_profile_url", self.github_profile_url.as_deref())?;

        let role = match self.role {
            Some(ref label) => Some(
                Role::parse(label)
                    .map_err(|message| ValidationError::invalid_format("role", message))?,
            ),
            None => None,
        };

        Ok(UserUpdate {
            email: self.email,
            nickname: self.nickname,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_picture_url: self.profile_picture_url,
            linkedin_profile_url: self.linkedin_profile_url,
            github_profile_url: self.github_profile_url,
            role,
        })
    }
}

/// Request for updating a user's role
#[derive(Debug, Deserialize)]
pub struct RoleUpdateRequest {
    pub role: String,
}

impl RoleUpdateRequest {
    pub fn validate(&self) -> Result<Role, ValidationError> {
        Role::parse(&self.role).map_err(|message| ValidationError::invalid_format("role", message))
    }
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email).map_err(|m| ValidationError::invalid_format("email", m))?;
        validate_password(&self.password)
            .map_err(|m| ValidationError::invalid_format("password", m))?;
        Ok(())
    }
}

/// Response for token generation
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Read projection of a user; never carries credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub role: Role,
    pub is_professional: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            profile_picture_url: user.profile_picture_url,
            linkedin_profile_url: user.linkedin_profile_url,
            github_profile_url: user.github_profile_url,
            role: user.role,
            is_professional: user.is_professional,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Paginated user listing
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

/// Query parameters for the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListQuery {
    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Items per page, clamped to 1..=100.
    pub fn size(&self) -> u32 {
        self.size.unwrap_or(10).clamp(1, 100)
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
