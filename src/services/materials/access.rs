//! 资料访问控制
//!
//! 请求方在某学期中的访问层级按以下顺序判定，先命中者生效：
//! 匿名 -> Public，超级用户 -> Admin，无人员档案 -> Public，
//! 助教 -> TA，选课学生 -> Student，其余 -> Public。

use crate::errors::Result;
use crate::models::materials::entities::{AccessTier, FileMaterial};
use crate::models::memberships::entities::MembershipKind;
use crate::models::users::entities::Identity;
use crate::storage::Storage;

/// 由三个判定条件得出层级
pub fn resolve_tier(is_admin: bool, is_ta: bool, is_student: bool) -> AccessTier {
    if is_admin {
        AccessTier::Admin
    } else if is_ta {
        AccessTier::Ta
    } else if is_student {
        AccessTier::Student
    } else {
        AccessTier::Public
    }
}

/// 请求方在指定学期中的访问层级
pub async fn access_tier(
    storage: &dyn Storage,
    identity: Option<&Identity>,
    semester_id: i64,
) -> Result<AccessTier> {
    let Some(identity) = identity else {
        return Ok(AccessTier::Public);
    };

    if identity.is_superuser() {
        return Ok(AccessTier::Admin);
    }

    let Some(person) = &identity.person else {
        return Ok(AccessTier::Public);
    };

    let is_ta = storage
        .has_membership(MembershipKind::TeachingAssisting, person.user_id, semester_id)
        .await?;
    if is_ta {
        return Ok(resolve_tier(false, true, false));
    }

    let is_student = storage
        .has_membership(MembershipKind::Enrolling, person.user_id, semester_id)
        .await?;

    Ok(resolve_tier(false, false, is_student))
}

/// 请求方层级不低于资料要求的层级时允许访问
pub async fn has_access(
    storage: &dyn Storage,
    identity: Option<&Identity>,
    material: &FileMaterial,
) -> Result<bool> {
    let tier = access_tier(storage, identity, material.semester_id).await?;
    Ok(tier >= material.access_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [AccessTier; 4] = [
        AccessTier::Public,
        AccessTier::Student,
        AccessTier::Ta,
        AccessTier::Admin,
    ];

    #[test]
    fn test_resolve_tier_priority() {
        assert_eq!(resolve_tier(false, false, false), AccessTier::Public);
        assert_eq!(resolve_tier(false, false, true), AccessTier::Student);
        assert_eq!(resolve_tier(false, true, false), AccessTier::Ta);
        // 同时是助教和学生时取更高者
        assert_eq!(resolve_tier(false, true, true), AccessTier::Ta);
    }

    #[test]
    fn test_admin_always_wins() {
        for is_ta in [false, true] {
            for is_student in [false, true] {
                assert_eq!(resolve_tier(true, is_ta, is_student), AccessTier::Admin);
            }
        }
    }

    #[test]
    fn test_access_is_monotonic_in_tier() {
        // 某层级可访问的资料，更高层级也一定可访问
        for required in TIERS {
            for (i, low) in TIERS.iter().enumerate() {
                for high in &TIERS[i..] {
                    if low >= &required {
                        assert!(high >= &required);
                    }
                }
            }
        }
    }

    #[test]
    fn test_tier_levels_match_stored_values() {
        for (level, tier) in TIERS.iter().enumerate() {
            assert_eq!(tier.level(), level as i32);
            assert_eq!(AccessTier::from_level(level as i32), Some(*tier));
        }
        assert_eq!(AccessTier::from_level(4), None);
    }
}
