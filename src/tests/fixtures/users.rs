// Shared test users. Password hashes use the minimum bcrypt cost and are
// computed once, so `alice()` compares equal across calls.

use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::User;
use std::sync::LazyLock;

pub const ALICE_PASSWORD: &str = "alice-password";
pub const BOB_PASSWORD: &str = "bob-password";
pub const CAROL_PASSWORD: &str = "carol-password";

fn hashed(password: &str) -> String {
    bcrypt::hash(password, 4).expect("bcrypt hash failed")
}

static ALICE_HASH: LazyLock<String> = LazyLock::new(|| hashed(ALICE_PASSWORD));
static BOB_HASH: LazyLock<String> = LazyLock::new(|| hashed(BOB_PASSWORD));
static CAROL_HASH: LazyLock<String> = LazyLock::new(|| hashed(CAROL_PASSWORD));

fn user(user_id: &str, username: &str, first_name: &str, password_hash: &str) -> User {
    User {
        user_id: user_id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        password_hash: password_hash.to_string(),
    }
}

pub fn alice() -> User {
    user("user-alice", "alice", "Alice", &ALICE_HASH)
}

pub fn bob() -> User {
    user("user-bob", "bob", "Bob", &BOB_HASH)
}

pub fn carol() -> User {
    user("user-carol", "carol", "Carol", &CAROL_HASH)
}

pub fn alice_identity() -> Identity {
    Identity::from(&alice())
}

pub fn bob_identity() -> Identity {
    Identity::from(&bob())
}
