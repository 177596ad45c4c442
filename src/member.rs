//! Account members.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::role::{MemberRole, sort_by_privilege};

/// Identifier of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw user ID.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw user ID.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's membership in an account.
///
/// Each user holds exactly one role per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMember {
    /// The member's user ID.
    pub user_id: UserId,
    /// The member's email address, shown in the members panel.
    pub email: String,
    /// What the member may do in the account.
    pub role: MemberRole,
}

/// Return `members` from the most to the least privileged.
///
/// Members with the same role keep their relative order.
pub fn sort_members(members: &[AccountMember]) -> Vec<AccountMember> {
    let mut sorted = members.to_vec();
    sort_by_privilege(&mut sorted, |member| member.role);
    sorted
}
