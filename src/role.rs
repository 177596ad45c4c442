//! Member roles and the privilege order between them.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The role a user holds in an account.
///
/// Roles are totally ordered by privilege:
/// `Viewer < Editor < Admin < Owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MemberRole {
    /// Can see the account and its operations.
    Viewer,
    /// Can also record operations and change the ones they recorded.
    Editor,
    /// Can also change operations recorded by anyone.
    Admin,
    /// Created the account and manages its members.
    Owner,
}

impl MemberRole {
    /// All roles from least to most privileged.
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Viewer,
        MemberRole::Editor,
        MemberRole::Admin,
        MemberRole::Owner,
    ];

    /// The position of the role in the privilege order, starting at zero.
    pub fn rank(self) -> u8 {
        match self {
            Self::Viewer => 0,
            Self::Editor => 1,
            Self::Admin => 2,
            Self::Owner => 3,
        }
    }

    /// The name used for the role on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Whether the role can be given to a member through an invitation or a
    /// role change.
    pub fn is_assignable(self) -> bool {
        self != Self::Owner
    }
}

impl PartialOrd for MemberRole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MemberRole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl FromStr for MemberRole {
    type Err = Error;

    /// Parse a role name.
    ///
    /// `contributor` is an older name for [MemberRole::Editor] and is still
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Self::Viewer),
            "editor" | "contributor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            other => Err(Error::InvalidRole(other.to_owned())),
        }
    }
}

impl TryFrom<String> for MemberRole {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether `user_role` grants at least the access of `required_role`.
///
/// A user without a role has no access at all, and a missing requirement is
/// satisfied by any role.
pub fn satisfies(user_role: Option<MemberRole>, required_role: Option<MemberRole>) -> bool {
    match (user_role, required_role) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(user_role), Some(required_role)) => user_role >= required_role,
    }
}

/// Compare two roles by privilege.
pub fn compare(role_a: MemberRole, role_b: MemberRole) -> Ordering {
    role_a.cmp(&role_b)
}

/// [compare] as `-1`, `0` or `1`.
pub fn compare_sign(role_a: MemberRole, role_b: MemberRole) -> i8 {
    compare(role_a, role_b) as i8
}

/// Sort `items` from the most to the least privileged role.
///
/// The sort is stable, items with the same role keep their relative order.
pub fn sort_by_privilege<T>(items: &mut [T], role_of: impl Fn(&T) -> MemberRole) {
    items.sort_by(|a, b| compare(role_of(b), role_of(a)));
}
