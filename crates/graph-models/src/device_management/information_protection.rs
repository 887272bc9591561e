//! Windows Information Protection policies and the types they reference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DeviceAndAppManagementAssignmentTarget;
use crate::{Base64Binary, DateTimeOffset, define_family, model};

/// Properties shared by every Windows Information Protection policy.
#[model(fields)]
pub struct WindowsInformationProtectionFields {
    pub id: Option<String>,
    pub created_date_time: Option<DateTimeOffset>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_date_time: Option<DateTimeOffset>,
    pub version: Option<String>,
    pub assignments: Option<Vec<TargetedManagedAppPolicyAssignment>>,
    pub azure_rights_management_services_allowed: Option<bool>,
    pub data_recovery_certificate: Option<WindowsInformationProtectionDataRecoveryCertificate>,
    pub enforcement_level: Option<WindowsInformationProtectionEnforcementLevel>,
    pub enterprise_domain: Option<String>,
    pub enterprise_internal_proxy_servers: Option<Vec<WindowsInformationProtectionResourceCollection>>,
    #[serde(rename = "enterpriseIPRanges")]
    pub enterprise_ip_ranges: Option<Vec<WindowsInformationProtectionIPRangeCollection>>,
    #[serde(rename = "enterpriseIPRangesAreAuthoritative")]
    pub enterprise_ip_ranges_are_authoritative: Option<bool>,
    pub enterprise_network_domain_names: Option<Vec<WindowsInformationProtectionResourceCollection>>,
    pub enterprise_protected_domain_names: Option<Vec<WindowsInformationProtectionResourceCollection>>,
    pub enterprise_proxied_domains: Option<Vec<WindowsInformationProtectionProxiedDomainCollection>>,
    pub enterprise_proxy_servers: Option<Vec<WindowsInformationProtectionResourceCollection>>,
    pub enterprise_proxy_servers_are_authoritative: Option<bool>,
    pub exempt_app_locker_files: Option<Vec<WindowsInformationProtectionAppLockerFile>>,
    pub exempt_apps: Option<Vec<WindowsInformationProtectionApp>>,
    pub icons_visible: Option<bool>,
    pub indexing_encrypted_stores_or_items_blocked: Option<bool>,
    pub is_assigned: Option<bool>,
    pub neutral_domain_resources: Option<Vec<WindowsInformationProtectionResourceCollection>>,
    pub protected_app_locker_files: Option<Vec<WindowsInformationProtectionAppLockerFile>>,
    pub protected_apps: Option<Vec<WindowsInformationProtectionApp>>,
    pub protection_under_lock_config_required: Option<bool>,
    pub revoke_on_unenroll_disabled: Option<bool>,
    pub rights_management_services_template_id: Option<Uuid>,
    pub smb_auto_encrypted_file_extensions: Option<Vec<WindowsInformationProtectionResourceCollection>>,
}

#[model(odata_type = "#microsoft.graph.windowsInformationProtection")]
pub struct WindowsInformationProtectionBase {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionFields,
}

define_family! {
    /// A Windows Information Protection policy, with or without MDM enrollment.
    pub WindowsInformationProtection(WindowsInformationProtectionBase) {
        "#microsoft.graph.mdmWindowsInformationProtectionPolicy" => MdmWindowsInformationProtectionPolicy,
        "#microsoft.graph.windowsInformationProtectionPolicy" => WindowsInformationProtectionPolicy,
    }
}

/// Policy applied to MDM-enrolled devices.
#[model(odata_type = "#microsoft.graph.mdmWindowsInformationProtectionPolicy")]
pub struct MdmWindowsInformationProtectionPolicy {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionFields,
}

/// Policy applied without enrollment (MAM).
#[model(odata_type = "#microsoft.graph.windowsInformationProtectionPolicy")]
pub struct WindowsInformationProtectionPolicy {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionFields,
    pub days_without_contact_before_unenroll: Option<i32>,
    pub mdm_enrollment_url: Option<String>,
    pub minutes_of_inactivity_before_device_lock: Option<i32>,
    pub number_of_past_pins_remembered: Option<i32>,
    pub password_maximum_attempt_count: Option<i32>,
    pub pin_expiration_days: Option<i32>,
    pub pin_lowercase_letters: Option<WindowsInformationProtectionPinCharacterRequirements>,
    pub pin_minimum_length: Option<i32>,
    pub pin_special_characters: Option<WindowsInformationProtectionPinCharacterRequirements>,
    pub pin_uppercase_letters: Option<WindowsInformationProtectionPinCharacterRequirements>,
    pub revoke_on_mdm_handoff_disabled: Option<bool>,
    pub windows_hello_for_business_blocked: Option<bool>,
}

#[model(odata_type = "#microsoft.graph.targetedManagedAppPolicyAssignment")]
pub struct TargetedManagedAppPolicyAssignment {
    pub id: Option<String>,
    pub target: Option<DeviceAndAppManagementAssignmentTarget>,
}

/// Certificate used to recover encrypted data.
#[model]
pub struct WindowsInformationProtectionDataRecoveryCertificate {
    pub certificate: Option<Base64Binary>,
    pub description: Option<String>,
    pub expiration_date_time: Option<DateTimeOffset>,
    pub subject_name: Option<String>,
}

/// A named list of resources such as domains or proxy servers.
#[model]
pub struct WindowsInformationProtectionResourceCollection {
    pub display_name: Option<String>,
    pub resources: Option<Vec<String>>,
}

#[model]
pub struct WindowsInformationProtectionIPRangeCollection {
    pub display_name: Option<String>,
    pub ranges: Option<Vec<IpRange>>,
}

#[model]
pub struct WindowsInformationProtectionProxiedDomainCollection {
    pub display_name: Option<String>,
    pub proxied_domains: Option<Vec<ProxiedDomain>>,
}

#[model]
pub struct ProxiedDomain {
    #[serde(rename = "ipAddressOrFQDN")]
    pub ip_address_or_fqdn: Option<String>,
    pub proxy: Option<String>,
}

/// An AppLocker policy file.
#[model(odata_type = "#microsoft.graph.windowsInformationProtectionAppLockerFile")]
pub struct WindowsInformationProtectionAppLockerFile {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub file: Option<Base64Binary>,
    pub file_hash: Option<String>,
    pub version: Option<String>,
}

#[model(odata_type = "#microsoft.graph.ipRange")]
pub struct IpRangeBase {}

define_family! {
    /// An IPv4 or IPv6 address range, as bounds or CIDR.
    pub IpRange(IpRangeBase) {
        "#microsoft.graph.iPv4CidrRange" => IPv4CidrRange,
        "#microsoft.graph.iPv4Range" => IPv4Range,
        "#microsoft.graph.iPv6CidrRange" => IPv6CidrRange,
        "#microsoft.graph.iPv6Range" => IPv6Range,
    }
}

#[model(odata_type = "#microsoft.graph.iPv4CidrRange")]
pub struct IPv4CidrRange {
    pub cidr_address: Option<String>,
}

#[model(odata_type = "#microsoft.graph.iPv4Range")]
pub struct IPv4Range {
    pub lower_address: Option<String>,
    pub upper_address: Option<String>,
}

#[model(odata_type = "#microsoft.graph.iPv6CidrRange")]
pub struct IPv6CidrRange {
    pub cidr_address: Option<String>,
}

#[model(odata_type = "#microsoft.graph.iPv6Range")]
pub struct IPv6Range {
    pub lower_address: Option<String>,
    pub upper_address: Option<String>,
}

/// Properties every protected or exempt app carries.
#[model(fields)]
pub struct WindowsInformationProtectionAppFields {
    pub denied: Option<bool>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub product_name: Option<String>,
    pub publisher_name: Option<String>,
}

#[model(odata_type = "#microsoft.graph.windowsInformationProtectionApp")]
pub struct WindowsInformationProtectionAppBase {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionAppFields,
}

define_family! {
    /// A desktop or Store app listed in a policy.
    pub WindowsInformationProtectionApp(WindowsInformationProtectionAppBase) {
        "#microsoft.graph.windowsInformationProtectionDesktopApp" => WindowsInformationProtectionDesktopApp,
        "#microsoft.graph.windowsInformationProtectionStoreApp" => WindowsInformationProtectionStoreApp,
    }
}

#[model(odata_type = "#microsoft.graph.windowsInformationProtectionDesktopApp")]
pub struct WindowsInformationProtectionDesktopApp {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionAppFields,
    pub binary_name: Option<String>,
    pub binary_version_high: Option<String>,
    pub binary_version_low: Option<String>,
}

#[model(odata_type = "#microsoft.graph.windowsInformationProtectionStoreApp")]
pub struct WindowsInformationProtectionStoreApp {
    #[serde(flatten)]
    pub base: WindowsInformationProtectionAppFields,
}

/// Apps seen accessing enterprise data while a policy ran in learning mode.
#[model(odata_type = "#microsoft.graph.windowsInformationProtectionAppLearningSummary")]
pub struct WindowsInformationProtectionAppLearningSummary {
    pub id: Option<String>,
    pub application_name: Option<String>,
    pub application_type: Option<ApplicationType>,
    pub device_count: Option<i32>,
}

/// Network locations seen while a policy ran in learning mode.
#[model(odata_type = "#microsoft.graph.windowsInformationProtectionNetworkLearningSummary")]
pub struct WindowsInformationProtectionNetworkLearningSummary {
    pub id: Option<String>,
    pub device_count: Option<i32>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WindowsInformationProtectionEnforcementLevel {
    NoProtection,
    EncryptAndAuditOnly,
    EncryptAuditAndPrompt,
    EncryptAuditAndBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WindowsInformationProtectionPinCharacterRequirements {
    NotAllow,
    RequireAtLeastOne,
    Allow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationType {
    Universal,
    Desktop,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::uuid;

    use super::*;
    use crate::{Model, codec, diff};

    fn mam_policy() -> serde_json::Value {
        json!({
            "@odata.type": "#microsoft.graph.windowsInformationProtectionPolicy",
            "id": "wip-1",
            "displayName": "Contoso WIP",
            "version": "7",
            "enforcementLevel": "encryptAuditAndPrompt",
            "enterpriseDomain": "contoso.example",
            "enterpriseIPRanges": [{
                "displayName": "Offices",
                "ranges": [
                    {"@odata.type": "#microsoft.graph.iPv4Range", "lowerAddress": "10.0.0.1", "upperAddress": "10.0.0.254"},
                    {"@odata.type": "#microsoft.graph.iPv6CidrRange", "cidrAddress": "fd00::/8"}
                ]
            }],
            "enterpriseIPRangesAreAuthoritative": true,
            "enterpriseProxiedDomains": [{
                "displayName": "Proxied",
                "proxiedDomains": [{"ipAddressOrFQDN": "proxy.contoso.example", "proxy": "wpad"}]
            }],
            "protectedApps": [
                {"@odata.type": "#microsoft.graph.windowsInformationProtectionDesktopApp", "displayName": "Notepad", "binaryName": "notepad.exe"},
                {"@odata.type": "#microsoft.graph.windowsInformationProtectionStoreApp", "displayName": "Mail"}
            ],
            "rightsManagementServicesTemplateId": "1a2b3c4d-0000-4000-8000-00000000abcd",
            "pinMinimumLength": 6,
            "pinUppercaseLetters": "requireAtLeastOne",
            "revokeOnMdmHandoffDisabled": false
        })
    }

    #[test]
    fn test_policy_family_resolves_mam_policy() {
        // Arrange
        let input = mam_policy();

        // Act
        let policy = WindowsInformationProtection::from_value(input).expect("decode");

        // Assert
        let WindowsInformationProtection::WindowsInformationProtectionPolicy(policy) = policy else {
            panic!("expected the MAM policy variant");
        };
        assert_eq!(policy.base.display_name.as_deref(), Some("Contoso WIP"));
        assert_eq!(
            policy.base.enforcement_level,
            Some(WindowsInformationProtectionEnforcementLevel::EncryptAuditAndPrompt)
        );
        assert_eq!(
            policy.base.rights_management_services_template_id,
            Some(uuid!("1a2b3c4d-0000-4000-8000-00000000abcd"))
        );
        assert_eq!(policy.pin_minimum_length, Some(6));
        assert_eq!(
            policy.pin_uppercase_letters,
            Some(WindowsInformationProtectionPinCharacterRequirements::RequireAtLeastOne)
        );
    }

    #[test]
    fn test_nested_ranges_and_apps_dispatch() {
        // Arrange
        let input = mam_policy();

        // Act
        let policy: WindowsInformationProtectionPolicy = codec::decode_value(input).expect("decode");

        // Assert
        let collections = policy.base.enterprise_ip_ranges.unwrap_or_default();
        let ranges = collections[0].ranges.as_deref().unwrap_or_default();
        assert!(matches!(&ranges[0], IpRange::IPv4Range(range) if range.upper_address.as_deref() == Some("10.0.0.254")));
        assert!(matches!(&ranges[1], IpRange::IPv6CidrRange(range) if range.cidr_address.as_deref() == Some("fd00::/8")));

        let apps = policy.base.protected_apps.unwrap_or_default();
        let names: Vec<_> = apps.iter().map(WindowsInformationProtectionApp::variant_name).collect();
        assert_eq!(names, ["WindowsInformationProtectionDesktopApp", "WindowsInformationProtectionStoreApp"]);
    }

    #[test]
    fn test_policy_roundtrip_is_lossless() {
        // Arrange
        let input = mam_policy();

        // Act
        let output = codec::roundtrip_value::<WindowsInformationProtection>(input.clone())
            .expect("roundtrip");

        // Assert
        assert!(diff::diff(&input, &output).is_empty());
    }

    #[test]
    fn test_proxied_domain_uses_irregular_fqdn_key() {
        // Arrange
        let domain = ProxiedDomain {
            ip_address_or_fqdn: Some("10.1.1.1".into()),
            ..ProxiedDomain::default()
        };

        // Act
        let output = codec::encode_value(&domain).expect("encode");

        // Assert
        assert_eq!(output, json!({"ipAddressOrFQDN": "10.1.1.1"}));
    }

    #[test]
    fn test_mdm_policy_has_no_mam_only_fields() {
        // Arrange
        let input = json!({
            "@odata.type": "#microsoft.graph.mdmWindowsInformationProtectionPolicy",
            "pinMinimumLength": 4,
            "iconsVisible": true
        });

        // Act
        let policy = WindowsInformationProtection::from_value(input).expect("decode");

        // Assert
        assert_eq!(policy.model_name(), "MdmWindowsInformationProtectionPolicy");
        let WindowsInformationProtection::MdmWindowsInformationProtectionPolicy(mdm) = &policy else {
            panic!("expected the MDM policy variant");
        };
        assert_eq!(mdm.base.icons_visible, Some(true));
        assert_eq!(mdm.additional_data.get("pinMinimumLength"), Some(&json!(4)));
    }

    #[test]
    fn test_untagged_range_falls_back_to_base() {
        // Arrange
        let input = json!({"lowerAddress": "10.0.0.1"});

        // Act
        let range = IpRange::from_value(input.clone()).expect("decode");

        // Assert
        assert!(matches!(range, IpRange::Base(_)));
        assert_eq!(codec::encode_value(&range).expect("encode"), input);
    }
}
