//! Social-media user entity and its capability.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainResult, ValidationError};
use crate::domain::validation::{looks_like_email, DEFAULT_MIN_USER_AGE};

/// Admission rules applied when a user is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserPolicy {
    /// Youngest accepted age in years (default: 13)
    pub min_age: i32,
}

impl Default for UserPolicy {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_USER_AGE,
        }
    }
}

/// Validated user attributes.
///
/// The age check runs before the email check, so an underage user with a
/// malformed address is reported as too young.
///
/// ```
/// use entities::{SocialMediaUser, ValidationError};
///
/// let alice = SocialMediaUser::new("alice", 20, "alice@example.com").unwrap();
/// assert_eq!(alice.username(), "alice");
///
/// let err = SocialMediaUser::new("alice", 12, "no-at-sign").unwrap_err();
/// assert!(matches!(err, ValidationError::UserTooYoung { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialMediaUser {
    username: String,
    age: i32,
    email: String,
}

impl SocialMediaUser {
    /// Build a user under the default [`UserPolicy`].
    pub fn new(
        username: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_policy(username, age, email, &UserPolicy::default())
    }

    /// Build a user, enforcing `policy.min_age` and a structurally valid email.
    pub fn with_policy(
        username: impl Into<String>,
        age: i32,
        email: impl Into<String>,
        policy: &UserPolicy,
    ) -> DomainResult<Self> {
        let username = username.into();
        let email = email.into();

        if age < policy.min_age {
            let err = ValidationError::UserTooYoung {
                age,
                min_age: policy.min_age,
            };
            warn!(%username, age, min_age = policy.min_age, "rejected user: {}", err);
            return Err(err);
        }
        if !looks_like_email(&email) {
            warn!(%username, %email, "rejected user: invalid email format");
            return Err(ValidationError::InvalidEmail { email });
        }

        debug!(%username, age, "user created");
        Ok(Self {
            username,
            age,
            email,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the username. Not re-validated.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }
}

/// Operations every concrete user must supply.
///
/// ```compile_fail
/// use entities::{SocialMediaUser, UserBehavior};
///
/// struct Lurker(SocialMediaUser);
///
/// impl UserBehavior for Lurker {
///     fn user(&self) -> &SocialMediaUser {
///         &self.0
///     }
///     fn update_profile(&mut self, new_username: &str) {
///         self.0.set_username(new_username);
///     }
///     // post_content missing
/// }
/// ```
pub trait UserBehavior {
    /// The validated attributes backing this user.
    fn user(&self) -> &SocialMediaUser;

    /// Record or transmit `content`.
    fn post_content(&mut self, content: &str);

    fn update_profile(&mut self, new_username: &str);
}

/// A published piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Username at the time of posting
    pub author: String,
    pub content: String,
}

/// User that keeps its posts in an in-memory feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedUser {
    user: SocialMediaUser,
    posts: Vec<Post>,
}

impl FeedUser {
    pub fn new(user: SocialMediaUser) -> Self {
        Self {
            user,
            posts: Vec::new(),
        }
    }

    /// Posts in publication order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl From<SocialMediaUser> for FeedUser {
    fn from(user: SocialMediaUser) -> Self {
        Self::new(user)
    }
}

impl UserBehavior for FeedUser {
    fn user(&self) -> &SocialMediaUser {
        &self.user
    }

    #[instrument(level = "trace", skip(self))]
    fn post_content(&mut self, content: &str) {
        self.posts.push(Post {
            author: self.user.username.clone(),
            content: content.to_string(),
        });
        debug!(username = %self.user.username, count = self.posts.len(), "content posted");
    }

    #[instrument(level = "trace", skip(self))]
    fn update_profile(&mut self, new_username: &str) {
        self.user.set_username(new_username);
    }
}
