//! In-memory account store.
//!
//! Used for development and tests. Uniqueness of usernames and emails is
//! enforced through secondary indexes claimed with the `DashMap` entry API,
//! so concurrent registrations of the same name cannot both succeed.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use keyward_core::error::AppError;
use keyward_core::result::AppResult;
use keyward_entity::user::{AdminUpdateUser, CreateUser, UpdateProfile, User};

use super::UserStore;

/// Account store that lives for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<i64, User>>,
    usernames: Arc<DashMap<String, i64>>,
    emails: Arc<DashMap<String, i64>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn claim(index: &DashMap<String, i64>, key: String, id: i64) -> bool {
        match index.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    fn live(&self, id: i64) -> Option<User> {
        self.users
            .get(&id)
            .map(|u| u.value().clone())
            .filter(|u| !u.is_deleted())
    }

    /// Move `id`'s email index entry from `old` to `new`.
    fn reindex_email(&self, id: i64, old: &str, new: &str) -> AppResult<()> {
        let (old_key, new_key) = (old.to_lowercase(), new.to_lowercase());
        if old_key == new_key {
            return Ok(());
        }
        if !Self::claim(&self.emails, new_key, id) {
            return Err(AppError::conflict("Email already in use"));
        }
        self.emails.remove(&old_key);
        Ok(())
    }

    fn modify(&self, id: i64, apply: impl FnOnce(&mut User)) -> AppResult<User> {
        let mut entry = self
            .users
            .get_mut(&id)
            .filter(|u| !u.is_deleted())
            .ok_or_else(|| AppError::not_found("User not found"))?;
        apply(entry.value_mut());
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.live(id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let id = self.usernames.get(&username.to_lowercase()).map(|e| *e.value());
        Ok(id.and_then(|id| self.live(id)))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|e| !e.is_deleted())
            .map(|e| e.value().clone())
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let username_key = data.username.to_lowercase();

        if !Self::claim(&self.usernames, username_key.clone(), id) {
            return Err(AppError::conflict("Username already in use"));
        }
        if !Self::claim(&self.emails, data.email.to_lowercase(), id) {
            self.usernames.remove(&username_key);
            return Err(AppError::conflict("Email already in use"));
        }

        let now = Utc::now();
        let user = User {
            id,
            username: data.username,
            email: data.email,
            phone: None,
            password_hash: data.password_hash,
            role: data.role,
            account_enabled: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: i64, data: UpdateProfile) -> AppResult<User> {
        let current = self
            .live(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if let Some(email) = &data.email {
            self.reindex_email(id, &current.email, email)?;
        }
        self.modify(id, |user| {
            if let Some(email) = data.email {
                user.email = email;
            }
            if let Some(phone) = data.phone {
                user.phone = Some(phone);
            }
        })
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()> {
        self.modify(id, |user| user.password_hash = password_hash.to_string())
            .map(|_| ())
    }

    async fn admin_update(&self, id: i64, data: AdminUpdateUser) -> AppResult<User> {
        let current = self
            .live(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if let Some(email) = &data.email {
            self.reindex_email(id, &current.email, email)?;
        }
        self.modify(id, |user| {
            if let Some(role) = data.role {
                user.role = role;
            }
            if let Some(email) = data.email {
                user.email = email;
            }
            if let Some(phone) = data.phone {
                user.phone = Some(phone);
            }
            if let Some(enabled) = data.account_enabled {
                user.account_enabled = enabled;
            }
        })
    }

    async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let user = self.modify(id, |user| user.deleted_at = Some(Utc::now()))?;
        self.usernames.remove(&user.username.to_lowercase());
        self.emails.remove(&user.email.to_lowercase());
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
