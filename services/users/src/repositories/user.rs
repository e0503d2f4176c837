//! User repository for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewUser, Role, User, UserUpdate};

const USER_COLUMNS: &str = "id, email, nickname, first_name, last_name, bio, \
     profile_picture_url, linkedin_profile_url, github_profile_url, role, \
     is_professional, password_hash, created_at, updated_at";

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// The plain password in `new_user` is hashed here; only the hash is
    /// written.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        info!("Creating new user: {}", new_user.email);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (email, nickname, first_name, last_name, bio,
                profile_picture_url, linkedin_profile_url, github_profile_url,
                role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.email)
        .bind(&new_user.nickname)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.bio)
        .bind(&new_user.profile_picture_url)
        .bind(&new_user.linkedin_profile_url)
        .bind(&new_user.github_profile_url)
        .bind(new_user.role.as_str())
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        user_from_row(&row)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Apply a partial update to a user
    ///
    /// Absent fields keep their stored values. Returns `None` when no user
    /// with `id` exists.
    pub async fn update(&self, id: Uuid, update: &UserUpdate) -> Result<Option<User>> {
        info!("Updating user: {}", id);

        let row = sqlx::query(&format!(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                nickname = COALESCE($3, nickname),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                bio = COALESCE($6, bio),
                profile_picture_url = COALESCE($7, profile_picture_url),
                linkedin_profile_url = COALESCE($8, linkedin_profile_url),
                github_profile_url = COALESCE($9, github_profile_url),
                role = COALESCE($10, role),
                updated_at = now()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.email)
        .bind(&update.nickname)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.bio)
        .bind(&update.profile_picture_url)
        .bind(&update.linkedin_profile_url)
        .bind(&update.github_profile_url)
        .bind(update.role.map(|role| role.as_str()))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Change a user's role
    pub async fn update_role(&self, id: Uuid, role: Role) -> Result<Option<User>> {
        info!("Updating role for user {} to {}", id, role);

        let row = sqlx::query(&format!(
            r#"
            UPDATE users
            SET role = $2, updated_at = now()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// List users in creation order with the total count
    pub async fn list(&self, page: u32, size: u32) -> Result<(Vec<User>, u64)> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(size);

        let rows = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>>>()?;

        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await?
            .get("total");

        Ok((users, total as u64))
    }

    /// Verify a user's password
    pub async fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

fn user_from_row(row: &PgRow) -> Result<User> {
    let role: String = row.get("role");
    let role = Role::parse(&role)
        .map_err(|_| anyhow::anyhow!("Stored role is not a member of the enumeration: {}", role))?;

    Ok(User {
        id: row.get("id"),
        email: row.get("email"),
        nickname: row.get("nickname"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        bio: row.get("bio"),
        profile_picture_url: row.get("profile_picture_url"),
        linkedin_profile_url: row.get("linkedin_profile_url"),
        github_profile_url: row.get("github_profile_url"),
        role,
        is_professional: row.get("is_professional"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
