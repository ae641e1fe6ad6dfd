use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::Id, password::Password, time::Timestamp};

pub const DEFAULT_AVATAR: &str = "default-avatar.png";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id                : Id,
    pub name              : String,
    pub email             : String,
    pub password          : Password,
    pub role              : Role,
    pub status            : ApprovalStatus,
    /// Relative path, resolved into an URL when rendered.
    pub avatar            : String,
    pub profile           : Profile,
    pub created_at        : Timestamp,
    pub updated_at        : Timestamp,
}

/// Optional, self-maintained details of a user.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub phone_number      : Option<String>,
    pub enrollment_number : Option<String>,
    pub degree            : Option<String>,
    pub branch            : Option<String>,
    pub graduation_year   : Option<i32>,
    pub skills            : Vec<String>,
    pub areas_of_interest : Vec<String>,
    pub job_title         : Option<String>,
    pub experience        : Option<String>,
    pub company           : Option<String>,
    pub social_links      : SocialLinks,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin : Option<String>,
    pub website  : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Student = 0,
    Alumni  = 1,
    Admin   = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Student
    }
}

impl Role {
    /// Members are the users listed in the public directories.
    pub const fn is_member(self) -> bool {
        matches!(self, Role::Student | Role::Alumni)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ApprovalStatus {
    Pending  = 0,
    Approved = 1,
    Rejected = 2,
}

impl Default for ApprovalStatus {
    fn default() -> ApprovalStatus {
        ApprovalStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn parse_roles_case_insensitive() {
        assert_eq!(Ok(Role::Alumni), "alumni".parse());
        assert_eq!(Ok(Role::Student), "Student".parse());
        assert_eq!(Ok(Role::Admin), "ADMIN".parse());
        assert!("guest".parse::<Role>().is_err());
        assert_eq!("alumni", Role::Alumni.to_string());
    }

    #[test]
    fn role_primitives() {
        for role in [Role::Student, Role::Alumni, Role::Admin] {
            assert_eq!(Some(role), Role::from_i16(role.to_i16().unwrap()));
        }
        assert_eq!(None, Role::from_i16(3));
    }

    #[test]
    fn only_students_and_alumni_are_members() {
        assert!(Role::Student.is_member());
        assert!(Role::Alumni.is_member());
        assert!(!Role::Admin.is_member());
    }
}
