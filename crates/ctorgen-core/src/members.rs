//! Collection of the members a generated constructor may initialize.

use crate::model::{Member, MemberKind, TypeDescriptor};

/// A writable instance field or property that the compiler did not
/// synthesize. Accessibility is not considered.
pub fn is_viable(member: &Member) -> bool {
    if member.is_static || member.implicitly_declared || !member.writable {
        return false;
    }
    matches!(member.kind, MemberKind::Field | MemberKind::Property)
}

/// Viable members declared directly on `ty`, in declaration order.
///
/// Never fails; a type with nothing viable yields an empty list.
pub fn collect_viable_members(ty: &TypeDescriptor) -> Vec<&Member> {
    let mut viable: Vec<&Member> = ty.members.iter().filter(|m| is_viable(m)).collect();
    viable.sort_by_key(|m| m.declaration_order);
    tracing::trace!(
        type_name = %ty.name,
        total = ty.members.len(),
        viable = viable.len(),
        "collected viable members"
    );
    viable
}

#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod tests;
