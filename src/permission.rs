//! What each member role may do in an account.
//!
//! Every rule is a minimum role checked with [satisfies]:
//!
//! | Action                                   | Minimum role                          |
//! |------------------------------------------|---------------------------------------|
//! | View operations                          | viewer                                |
//! | Record an operation                      | editor                                |
//! | Edit or delete an operation              | editor for their own, admin otherwise |
//! | Invite, re-role or remove members        | owner                                 |
//! | Delete the account                       | owner                                 |

use crate::{
    Error,
    member::UserId,
    role::{MemberRole, satisfies},
};

/// Something a member wants to do in an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List the account's operations, totals and charts.
    ViewOperations,
    /// Record a new operation.
    CreateOperation,
    /// Change an existing operation recorded by `author`.
    EditOperation {
        /// Who recorded the operation, if known.
        author: Option<UserId>,
    },
    /// Delete an existing operation recorded by `author`.
    DeleteOperation {
        /// Who recorded the operation, if known.
        author: Option<UserId>,
    },
    /// Add a user to the account with `role`.
    InviteMember {
        /// The role the new member would get.
        role: MemberRole,
    },
    /// Give an existing member a new `role`.
    ChangeMemberRole {
        /// The role the member would get.
        role: MemberRole,
    },
    /// Take a member out of the account.
    RemoveMember,
    /// Delete the account and everything in it.
    DeleteAccount,
}

impl Action {
    /// The least privileged role that may perform the action when done by `actor`.
    pub fn required_role(self, actor: UserId) -> MemberRole {
        match self {
            Action::ViewOperations => MemberRole::Viewer,
            Action::CreateOperation => MemberRole::Editor,
            Action::EditOperation { author } | Action::DeleteOperation { author } => {
                if author == Some(actor) {
                    MemberRole::Editor
                } else {
                    MemberRole::Admin
                }
            }
            Action::InviteMember { .. }
            | Action::ChangeMemberRole { .. }
            | Action::RemoveMember
            | Action::DeleteAccount => MemberRole::Owner,
        }
    }
}

/// Check that `actor`, holding `role` in the account, may perform `action`.
///
/// `role` is `None` when the actor is not a member of the account.
///
/// # Errors
///
/// Returns:
/// - [Error::Forbidden] if the role is missing or not privileged enough,
/// - [Error::UnassignableRole] if the action would hand out the owner role.
pub fn authorize(actor: UserId, role: Option<MemberRole>, action: Action) -> Result<(), Error> {
    let required_role = action.required_role(actor);

    if !satisfies(role, Some(required_role)) {
        tracing::debug!(
            "Denied {action:?} for user {actor} with role {role:?}, requires {required_role}"
        );
        return Err(Error::Forbidden);
    }

    match action {
        Action::InviteMember { role } | Action::ChangeMemberRole { role }
            if !role.is_assignable() =>
        {
            Err(Error::UnassignableRole(role))
        }
        _ => Ok(()),
    }
}

/// Boolean form of [authorize], e.g. for deciding which buttons to show.
pub fn is_allowed(actor: UserId, role: Option<MemberRole>, action: Action) -> bool {
    authorize(actor, role, action).is_ok()
}
