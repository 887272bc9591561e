//! Intune device management: the singleton root, device configuration
//! profiles, assignment targets and Windows Information Protection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Base64Binary, Entity, define_family, model};

mod configuration;
mod information_protection;
mod media_content_rating;

pub use configuration::*;
pub use information_protection::*;
pub use media_content_rating::*;

/// The Intune tenant root.
///
/// Navigation properties typed [`Entity`] hold types not modelled here; their
/// properties stay in each entity's additional data.
#[model(odata_type = "#microsoft.graph.deviceManagement")]
pub struct DeviceManagement {
    pub id: Option<String>,
    pub apple_push_notification_certificate: Option<Entity>,
    pub audit_events: Option<Vec<Entity>>,
    pub compliance_management_partners: Option<Vec<Entity>>,
    pub conditional_access_settings: Option<Entity>,
    pub detected_apps: Option<Vec<Entity>>,
    pub device_categories: Option<Vec<Entity>>,
    pub device_compliance_policies: Option<Vec<Entity>>,
    pub device_compliance_policy_device_state_summary: Option<Entity>,
    pub device_compliance_policy_setting_state_summaries: Option<Vec<Entity>>,
    pub device_configuration_device_state_summaries: Option<Entity>,
    pub device_configurations: Option<Vec<DeviceConfiguration>>,
    pub device_enrollment_configurations: Option<Vec<Entity>>,
    pub device_management_partners: Option<Vec<Entity>>,
    pub exchange_connectors: Option<Vec<Entity>>,
    pub imported_windows_autopilot_device_identities: Option<Vec<Entity>>,
    pub intune_account_id: Option<Uuid>,
    pub intune_brand: Option<IntuneBrand>,
    pub ios_update_statuses: Option<Vec<Entity>>,
    pub managed_device_overview: Option<Entity>,
    pub managed_devices: Option<Vec<Entity>>,
    pub mobile_threat_defense_connectors: Option<Vec<Entity>>,
    pub notification_message_templates: Option<Vec<Entity>>,
    pub remote_assistance_partners: Option<Vec<Entity>>,
    pub reports: Option<Entity>,
    pub resource_operations: Option<Vec<Entity>>,
    pub role_assignments: Option<Vec<Entity>>,
    pub role_definitions: Option<Vec<Entity>>,
    pub settings: Option<DeviceManagementSettings>,
    pub software_update_status_summary: Option<Entity>,
    pub subscription_state: Option<DeviceManagementSubscriptionState>,
    pub telecom_expense_management_partners: Option<Vec<Entity>>,
    pub terms_and_conditions: Option<Vec<Entity>>,
    pub troubleshooting_events: Option<Vec<Entity>>,
    pub windows_autopilot_device_identities: Option<Vec<Entity>>,
    pub windows_information_protection_app_learning_summaries:
        Option<Vec<WindowsInformationProtectionAppLearningSummary>>,
    pub windows_information_protection_network_learning_summaries:
        Option<Vec<WindowsInformationProtectionNetworkLearningSummary>>,
}

#[model]
pub struct DeviceManagementSettings {
    pub device_compliance_checkin_threshold_days: Option<i32>,
    pub is_scheduled_action_enabled: Option<bool>,
    pub secure_by_default: Option<bool>,
}

/// Company branding shown in the Company Portal.
#[model]
pub struct IntuneBrand {
    #[serde(rename = "contactITEmailAddress")]
    pub contact_it_email_address: Option<String>,
    #[serde(rename = "contactITName")]
    pub contact_it_name: Option<String>,
    #[serde(rename = "contactITNotes")]
    pub contact_it_notes: Option<String>,
    #[serde(rename = "contactITPhoneNumber")]
    pub contact_it_phone_number: Option<String>,
    pub dark_background_logo: Option<MimeContent>,
    pub display_name: Option<String>,
    pub light_background_logo: Option<MimeContent>,
    pub online_support_site_name: Option<String>,
    pub online_support_site_url: Option<String>,
    pub privacy_url: Option<String>,
    pub show_display_name_next_to_logo: Option<bool>,
    pub show_logo: Option<bool>,
    pub show_name_next_to_logo: Option<bool>,
    pub theme_color: Option<RgbColor>,
}

#[model]
pub struct MimeContent {
    /// MIME type such as `image/png`.
    pub r#type: Option<String>,
    pub value: Option<Base64Binary>,
}

/// A color as 8-bit channels.
#[model]
pub struct RgbColor {
    pub b: Option<u8>,
    pub g: Option<u8>,
    pub r: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DeviceManagementSubscriptionState {
    Pending,
    Active,
    Warning,
    Disabled,
    Deleted,
    Blocked,
    LockedOut,
}

#[model(odata_type = "#microsoft.graph.deviceAndAppManagementAssignmentTarget")]
pub struct DeviceAndAppManagementAssignmentTargetBase {}

define_family! {
    /// Who a policy or configuration is assigned to.
    pub DeviceAndAppManagementAssignmentTarget(DeviceAndAppManagementAssignmentTargetBase) {
        "#microsoft.graph.allDevicesAssignmentTarget" => AllDevicesAssignmentTarget,
        "#microsoft.graph.allLicensedUsersAssignmentTarget" => AllLicensedUsersAssignmentTarget,
        "#microsoft.graph.exclusionGroupAssignmentTarget" => ExclusionGroupAssignmentTarget,
        "#microsoft.graph.groupAssignmentTarget" => GroupAssignmentTarget,
    }
}

#[model(odata_type = "#microsoft.graph.allDevicesAssignmentTarget")]
pub struct AllDevicesAssignmentTarget {}

#[model(odata_type = "#microsoft.graph.allLicensedUsersAssignmentTarget")]
pub struct AllLicensedUsersAssignmentTarget {}

/// Excludes a group from an assignment.
#[model(odata_type = "#microsoft.graph.exclusionGroupAssignmentTarget")]
pub struct ExclusionGroupAssignmentTarget {
    pub group_id: Option<String>,
}

#[model(odata_type = "#microsoft.graph.groupAssignmentTarget")]
pub struct GroupAssignmentTarget {
    pub group_id: Option<String>,
}
