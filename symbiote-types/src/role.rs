use std::fmt;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::resource::ResourceKind;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {

    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn endpoint_path(&self, base_path: &str, endpoint: Endpoint) -> String {
        format!("{base_path}/{}/{}", self.path_segment(), endpoint.path_suffix())
    }

    pub fn login_path(&self, base_path: &str) -> String {
        format!("{base_path}/{}/login", self.path_segment())
    }

    /// Resource kinds which get a panel list in this role's control panel.
    pub fn resource_kinds(&self) -> &'static [ResourceKind] {
        match self {
            Role::Admin => &[ResourceKind::Federation],
            Role::User => &ResourceKind::ALL,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Role::Admin, Endpoint::ListFederations, "/administration/admin/cpanel/list_federations")]
    #[case(Role::User, Endpoint::ListUserPlatforms, "/administration/user/cpanel/list_user_platforms")]
    #[case(Role::User, Endpoint::RegisterInformationModel, "/administration/user/cpanel/register_information_model")]
    #[case(Role::Admin, Endpoint::DeleteInformationModel, "/administration/admin/cpanel/delete_information_model")]
    #[case(Role::Admin, Endpoint::DeletePlatformResources, "/administration/admin/cpanel/delete_platform_resources")]
    fn A_Role_should_prefix_endpoint_paths(#[case] role: Role, #[case] endpoint: Endpoint, #[case] expected: &str) {
        assert_that!(role.endpoint_path("/administration", endpoint), eq(expected));
    }

    #[rstest]
    #[case(Role::Admin, "/administration/admin/login")]
    #[case(Role::User, "/administration/user/login")]
    fn A_Role_should_have_its_own_login_path(#[case] role: Role, #[case] expected: &str) {
        assert_that!(role.login_path("/administration"), eq(expected));
    }

    #[test]
    fn A_Role_should_deserialize_from_lowercase() -> Result<()> {
        let role: Role = serde_json::from_str("\"admin\"").expect("Failed to deserialize role");
        assert_that!(role, eq(Role::Admin));
        Ok(())
    }
}
