//! Domain Services
//!
//! Pure ownership logic shared by every mutating operation on posts
//! and comments.

use auth::domain::value_object::user_id::UserId;

/// May `actor` mutate a resource owned by `owner`?
///
/// The actor is always a resolved identity here; requests without one
/// are rejected at the auth gate before any ownership question arises.
pub fn can_mutate(owner: UserId, actor: UserId) -> bool {
    owner == actor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_may_mutate() {
        let owner = UserId::from_i64(1);
        assert!(can_mutate(owner, owner));
    }

    #[test]
    fn test_everyone_else_may_not() {
        let owner = UserId::from_i64(1);
        for other in [0, 2, 42, i64::MAX] {
            assert!(
                !can_mutate(owner, UserId::from_i64(other)),
                "user {other} must not mutate a resource owned by user 1"
            );
        }
    }
}
