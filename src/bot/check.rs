use serenity::all::RoleId;

use crate::{bot::Context, error::AppError};

/// Command check allowing members holding a configured staff role.
///
/// Passes for everyone when no staff roles are configured, leaving the
/// administrator permission as the only gate.
pub async fn is_staff(ctx: Context<'_>) -> Result<bool, AppError> {
    let staff_role_ids = &ctx.data().staff_role_ids;
    if staff_role_ids.is_empty() {
        return Ok(true);
    }

    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };

    Ok(has_staff_role(&member.roles, staff_role_ids))
}

/// Whether any of the member's roles is a staff role.
pub fn has_staff_role(member_roles: &[RoleId], staff_role_ids: &[u64]) -> bool {
    member_roles
        .iter()
        .any(|role| staff_role_ids.contains(&role.get()))
}
