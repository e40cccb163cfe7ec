/// Backend operations consumed by the control panel. All of them are `POST` requests.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Endpoint {
    ListUserPlatforms,
    ListAllInformationModels,
    ListUserInformationModels,
    ListFederations,
    RegisterPlatform,
    UpdatePlatform,
    RegisterInformationModel,
    CreateFederation,
    DeletePlatform,
    DeleteInformationModel,
    DeleteFederation,
    DeletePlatformResources,
    GetPlatformConfig,
}

impl Endpoint {

    pub fn path_suffix(&self) -> &'static str {
        match self {
            Endpoint::ListUserPlatforms => "cpanel/list_user_platforms",
            Endpoint::ListAllInformationModels => "cpanel/list_all_info_models",
            Endpoint::ListUserInformationModels => "cpanel/list_user_info_models",
            Endpoint::ListFederations => "cpanel/list_federations",
            Endpoint::RegisterPlatform => "cpanel/register_platform",
            Endpoint::UpdatePlatform => "cpanel/update_platform",
            Endpoint::RegisterInformationModel => "cpanel/register_information_model",
            Endpoint::CreateFederation => "cpanel/create_federation",
            Endpoint::DeletePlatform => "cpanel/delete_platform",
            Endpoint::DeleteInformationModel => "cpanel/delete_information_model",
            Endpoint::DeleteFederation => "cpanel/delete_federation",
            Endpoint::DeletePlatformResources => "cpanel/delete_platform_resources",
            Endpoint::GetPlatformConfig => "cpanel/get_platform_config",
        }
    }
}
