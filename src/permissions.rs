//! Permission Codes
//!
//! The backend's authorization table, mirrored so role payloads decode into
//! a closed enum instead of bare integers. Codes are positional and must not
//! be reordered.

use serde::{Deserialize, Serialize};

/// A single grantable capability (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Permission {
    CreateProfile = 0,
    ReadProfile = 1,
    UpdateProfile = 2,
    DeleteProfile = 3,
    UpsertRole = 4,
    ReadRole = 5,
    EditBeforeBlogPublish = 6,
    DeleteRole = 7,
    CreateBlog = 8,
    ReadBlog = 9,
    UpdateBlog = 10,
    DeleteBlog = 11,
    PublishBlog = 12,
    AccessLogs = 13,
    UploadImage = 14,
    DeleteImage = 15,
    UpdateImage = 16,
    CreateEdition = 17,
    UpdateEdition = 18,
    DeleteEdition = 19,
    ReceiveBlogPublishedMail = 20,
    CreateUpdateEvent = 21,
}

impl From<Permission> for u8 {
    fn from(permission: Permission) -> u8 {
        permission as u8
    }
}

impl TryFrom<u8> for Permission {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        use Permission::*;
        let permission = match code {
            0 => CreateProfile,
            1 => ReadProfile,
            2 => UpdateProfile,
            3 => DeleteProfile,
            4 => UpsertRole,
            5 => ReadRole,
            6 => EditBeforeBlogPublish,
            7 => DeleteRole,
            8 => CreateBlog,
            9 => ReadBlog,
            10 => UpdateBlog,
            11 => DeleteBlog,
            12 => PublishBlog,
            13 => AccessLogs,
            14 => UploadImage,
            15 => DeleteImage,
            16 => UpdateImage,
            17 => CreateEdition,
            18 => UpdateEdition,
            19 => DeleteEdition,
            20 => ReceiveBlogPublishedMail,
            21 => CreateUpdateEvent,
            other => return Err(format!("unknown permission code {other}")),
        };
        Ok(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_codes_are_stable() {
        // Spot checks against the backend table; the blog codes are the ones
        // this frontend actually gates on.
        assert_eq!(u8::from(Permission::CreateProfile), 0);
        assert_eq!(u8::from(Permission::EditBeforeBlogPublish), 6);
        assert_eq!(u8::from(Permission::CreateBlog), 8);
        assert_eq!(u8::from(Permission::PublishBlog), 12);
        assert_eq!(u8::from(Permission::CreateUpdateEvent), 21);
    }

    #[test]
    fn test_every_code_round_trips() {
        for code in 0u8..=21 {
            let permission = Permission::try_from(code).unwrap();
            assert_eq!(u8::from(permission), code);
        }
        assert!(Permission::try_from(22).is_err());
    }

    #[test]
    fn test_permission_list_decodes_from_json() {
        let granted: Vec<Permission> = serde_json::from_str("[8, 9, 10, 11]").unwrap();
        assert_eq!(
            granted,
            vec![
                Permission::CreateBlog,
                Permission::ReadBlog,
                Permission::UpdateBlog,
                Permission::DeleteBlog,
            ]
        );
    }
}
