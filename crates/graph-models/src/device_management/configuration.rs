//! Intune device configuration profiles.

use std::{borrow::Cow, fmt, str::FromStr};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{
    DeviceAndAppManagementAssignmentTarget, MediaContentRatingAustralia, MediaContentRatingCanada,
    MediaContentRatingFrance, MediaContentRatingGermany, MediaContentRatingIreland,
    MediaContentRatingJapan, MediaContentRatingNewZealand, MediaContentRatingUnitedKingdom,
    MediaContentRatingUnitedStates, RatingAppsType,
};
use crate::{Base64Binary, DateTimeOffset, TimeOnly, define_family, model};

/// Properties every device configuration inherits.
#[model(fields)]
pub struct DeviceConfigurationFields {
    pub id: Option<String>,
    pub assignments: Option<Vec<DeviceConfigurationAssignment>>,
    pub created_date_time: Option<DateTimeOffset>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_date_time: Option<DateTimeOffset>,
    pub version: Option<i32>,
}

#[model(odata_type = "#microsoft.graph.deviceConfiguration")]
pub struct DeviceConfigurationBase {
    #[serde(flatten)]
    pub base: DeviceConfigurationFields,
}

define_family! {
    /// Any device configuration profile, resolved from `@odata.type`.
    pub DeviceConfiguration(DeviceConfigurationBase) {
        "#microsoft.graph.androidWorkProfileGeneralDeviceConfiguration" => AndroidWorkProfileGeneralDeviceConfiguration,
        "#microsoft.graph.iosGeneralDeviceConfiguration" => IosGeneralDeviceConfiguration,
        "#microsoft.graph.windows10GeneralConfiguration" => Windows10GeneralConfiguration,
        "#microsoft.graph.windows10EndpointProtectionConfiguration" => Windows10EndpointProtectionConfiguration,
    }
}

/// Assigns a configuration to a group of devices or users.
#[model(odata_type = "#microsoft.graph.deviceConfigurationAssignment")]
pub struct DeviceConfigurationAssignment {
    pub id: Option<String>,
    pub target: Option<DeviceAndAppManagementAssignmentTarget>,
}

/// General settings for Android work profiles.
#[model(odata_type = "#microsoft.graph.androidWorkProfileGeneralDeviceConfiguration")]
pub struct AndroidWorkProfileGeneralDeviceConfiguration {
    #[serde(flatten)]
    pub base: DeviceConfigurationFields,
    pub password_block_fingerprint_unlock: Option<bool>,
    pub password_block_trust_agents: Option<bool>,
    pub password_expiration_days: Option<i32>,
    pub password_minimum_length: Option<i32>,
    pub password_minutes_of_inactivity_before_screen_timeout: Option<i32>,
    pub password_previous_password_block_count: Option<i32>,
    pub password_required_type: Option<AndroidWorkProfileRequiredPasswordType>,
    pub password_sign_in_failure_count_before_factory_reset: Option<i32>,
    pub security_require_verify_apps: Option<bool>,
    pub work_profile_block_adding_accounts: Option<bool>,
    pub work_profile_block_camera: Option<bool>,
    pub work_profile_block_cross_profile_caller_id: Option<bool>,
    pub work_profile_block_cross_profile_contacts_search: Option<bool>,
    pub work_profile_block_cross_profile_copy_paste: Option<bool>,
    pub work_profile_block_notifications_while_device_locked: Option<bool>,
    pub work_profile_block_screen_capture: Option<bool>,
    pub work_profile_bluetooth_enable_contact_sharing: Option<bool>,
    pub work_profile_data_sharing_type: Option<AndroidWorkProfileCrossProfileDataSharingType>,
    pub work_profile_default_app_permission_policy:
        Option<AndroidWorkProfileDefaultAppPermissionPolicyType>,
    pub work_profile_password_block_fingerprint_unlock: Option<bool>,
    pub work_profile_password_block_trust_agents: Option<bool>,
    pub work_profile_password_expiration_days: Option<i32>,
    pub work_profile_password_minimum_length: Option<i32>,
    pub work_profile_password_min_letter_characters: Option<i32>,
    pub work_profile_password_min_lower_case_characters: Option<i32>,
    pub work_profile_password_min_non_letter_characters: Option<i32>,
    pub work_profile_password_min_numeric_characters: Option<i32>,
    pub work_profile_password_min_symbol_characters: Option<i32>,
    pub work_profile_password_min_upper_case_characters: Option<i32>,
    pub work_profile_password_minutes_of_inactivity_before_screen_timeout: Option<i32>,
    pub work_profile_password_previous_password_block_count: Option<i32>,
    pub work_profile_password_required_type: Option<AndroidWorkProfileRequiredPasswordType>,
    pub work_profile_password_sign_in_failure_count_before_factory_reset: Option<i32>,
    pub work_profile_require_password: Option<bool>,
}

/// General restrictions for iOS devices.
#[model(odata_type = "#microsoft.graph.iosGeneralDeviceConfiguration")]
pub struct IosGeneralDeviceConfiguration {
    #[serde(flatten)]
    pub base: DeviceConfigurationFields,
    pub account_block_modification: Option<bool>,
    pub activation_lock_allow_when_supervised: Option<bool>,
    pub air_drop_blocked: Option<bool>,
    pub air_drop_force_unmanaged_drop_target: Option<bool>,
    pub air_play_force_pairing_password_for_outgoing_requests: Option<bool>,
    pub apple_news_blocked: Option<bool>,
    pub apple_watch_block_pairing: Option<bool>,
    pub apple_watch_force_wrist_detection: Option<bool>,
    pub apps_single_app_mode_list: Option<Vec<AppListItem>>,
    pub app_store_block_automatic_downloads: Option<bool>,
    pub app_store_blocked: Option<bool>,
    pub app_store_block_in_app_purchases: Option<bool>,
    #[serde(rename = "appStoreBlockUIAppInstallation")]
    pub app_store_block_ui_app_installation: Option<bool>,
    pub app_store_require_password: Option<bool>,
    pub apps_visibility_list: Option<Vec<AppListItem>>,
    pub apps_visibility_list_type: Option<AppListType>,
    pub bluetooth_block_modification: Option<bool>,
    pub camera_blocked: Option<bool>,
    pub cellular_block_data_roaming: Option<bool>,
    pub cellular_block_global_background_fetch_while_roaming: Option<bool>,
    pub cellular_block_per_app_data_modification: Option<bool>,
    pub cellular_block_personal_hotspot: Option<bool>,
    pub cellular_block_voice_roaming: Option<bool>,
    pub certificates_block_untrusted_tls_certificates: Option<bool>,
    pub classroom_app_block_remote_screen_observation: Option<bool>,
    pub classroom_app_force_unprompted_screen_observation: Option<bool>,
    pub compliant_app_list_type: Option<AppListType>,
    pub compliant_apps_list: Option<Vec<AppListItem>>,
    pub configuration_profile_block_changes: Option<bool>,
    pub definition_lookup_blocked: Option<bool>,
    pub device_block_enable_restrictions: Option<bool>,
    pub device_block_erase_content_and_settings: Option<bool>,
    pub device_block_name_modification: Option<bool>,
    pub diagnostic_data_block_submission: Option<bool>,
    pub diagnostic_data_block_submission_modification: Option<bool>,
    pub documents_block_managed_documents_in_unmanaged_apps: Option<bool>,
    pub documents_block_unmanaged_documents_in_managed_apps: Option<bool>,
    pub email_in_domain_suffixes: Option<Vec<String>>,
    pub enterprise_app_block_trust: Option<bool>,
    pub enterprise_app_block_trust_modification: Option<bool>,
    pub face_time_blocked: Option<bool>,
    pub find_my_friends_blocked: Option<bool>,
    pub game_center_blocked: Option<bool>,
    pub gaming_block_game_center_friends: Option<bool>,
    pub gaming_block_multiplayer: Option<bool>,
    pub host_pairing_blocked: Option<bool>,
    pub i_books_store_blocked: Option<bool>,
    pub i_books_store_block_erotica: Option<bool>,
    pub i_cloud_block_activity_continuation: Option<bool>,
    pub i_cloud_block_backup: Option<bool>,
    pub i_cloud_block_document_sync: Option<bool>,
    pub i_cloud_block_managed_apps_sync: Option<bool>,
    pub i_cloud_block_photo_library: Option<bool>,
    pub i_cloud_block_photo_stream_sync: Option<bool>,
    pub i_cloud_block_shared_photo_stream: Option<bool>,
    pub i_cloud_require_encrypted_backup: Option<bool>,
    pub i_tunes_block_explicit_content: Option<bool>,
    pub i_tunes_block_music_service: Option<bool>,
    pub i_tunes_block_radio: Option<bool>,
    pub keyboard_block_auto_correct: Option<bool>,
    pub keyboard_block_dictation: Option<bool>,
    pub keyboard_block_predictive: Option<bool>,
    pub keyboard_block_shortcuts: Option<bool>,
    pub keyboard_block_spell_check: Option<bool>,
    pub kiosk_mode_allow_assistive_speak: Option<bool>,
    pub kiosk_mode_allow_assistive_touch_settings: Option<bool>,
    pub kiosk_mode_allow_auto_lock: Option<bool>,
    pub kiosk_mode_allow_color_inversion_settings: Option<bool>,
    pub kiosk_mode_allow_ringer_switch: Option<bool>,
    pub kiosk_mode_allow_screen_rotation: Option<bool>,
    pub kiosk_mode_allow_sleep_button: Option<bool>,
    pub kiosk_mode_allow_touchscreen: Option<bool>,
    pub kiosk_mode_allow_voice_over_settings: Option<bool>,
    pub kiosk_mode_allow_volume_buttons: Option<bool>,
    pub kiosk_mode_allow_zoom_settings: Option<bool>,
    pub kiosk_mode_app_store_url: Option<String>,
    pub kiosk_mode_built_in_app_id: Option<String>,
    pub kiosk_mode_managed_app_id: Option<String>,
    pub kiosk_mode_require_assistive_touch: Option<bool>,
    pub kiosk_mode_require_color_inversion: Option<bool>,
    pub kiosk_mode_require_mono_audio: Option<bool>,
    pub kiosk_mode_require_voice_over: Option<bool>,
    pub kiosk_mode_require_zoom: Option<bool>,
    pub lock_screen_block_control_center: Option<bool>,
    pub lock_screen_block_notification_view: Option<bool>,
    pub lock_screen_block_passbook: Option<bool>,
    pub lock_screen_block_today_view: Option<bool>,
    pub media_content_rating_apps: Option<RatingAppsType>,
    pub media_content_rating_australia: Option<MediaContentRatingAustralia>,
    pub media_content_rating_canada: Option<MediaContentRatingCanada>,
    pub media_content_rating_france: Option<MediaContentRatingFrance>,
    pub media_content_rating_germany: Option<MediaContentRatingGermany>,
    pub media_content_rating_ireland: Option<MediaContentRatingIreland>,
    pub media_content_rating_japan: Option<MediaContentRatingJapan>,
    pub media_content_rating_new_zealand: Option<MediaContentRatingNewZealand>,
    pub media_content_rating_united_kingdom: Option<MediaContentRatingUnitedKingdom>,
    pub media_content_rating_united_states: Option<MediaContentRatingUnitedStates>,
    pub messages_blocked: Option<bool>,
    pub network_usage_rules: Option<Vec<IosNetworkUsageRule>>,
    pub notifications_block_settings_modification: Option<bool>,
    pub passcode_block_fingerprint_modification: Option<bool>,
    pub passcode_block_fingerprint_unlock: Option<bool>,
    pub passcode_block_modification: Option<bool>,
    pub passcode_block_simple: Option<bool>,
    pub passcode_expiration_days: Option<i32>,
    pub passcode_minimum_character_set_count: Option<i32>,
    pub passcode_minimum_length: Option<i32>,
    pub passcode_minutes_of_inactivity_before_lock: Option<i32>,
    pub passcode_minutes_of_inactivity_before_screen_timeout: Option<i32>,
    pub passcode_previous_passcode_block_count: Option<i32>,
    pub passcode_required: Option<bool>,
    pub passcode_required_type: Option<RequiredPasswordType>,
    pub passcode_sign_in_failure_count_before_wipe: Option<i32>,
    pub podcasts_blocked: Option<bool>,
    pub safari_block_autofill: Option<bool>,
    pub safari_blocked: Option<bool>,
    pub safari_block_java_script: Option<bool>,
    pub safari_block_popups: Option<bool>,
    pub safari_cookie_settings: Option<WebBrowserCookieSettings>,
    pub safari_managed_domains: Option<Vec<String>>,
    pub safari_password_auto_fill_domains: Option<Vec<String>>,
    pub safari_require_fraud_warning: Option<bool>,
    pub screen_capture_blocked: Option<bool>,
    pub siri_blocked: Option<bool>,
    pub siri_blocked_when_locked: Option<bool>,
    pub siri_block_user_generated_content: Option<bool>,
    pub siri_require_profanity_filter: Option<bool>,
    pub spotlight_block_internet_results: Option<bool>,
    pub voice_dialing_blocked: Option<bool>,
    pub wallpaper_block_modification: Option<bool>,
    pub wi_fi_connect_only_to_configured_networks: Option<bool>,
}

/// General restrictions for Windows 10 devices.
#[model(odata_type = "#microsoft.graph.windows10GeneralConfiguration")]
pub struct Windows10GeneralConfiguration {
    #[serde(flatten)]
    pub base: DeviceConfigurationFields,
    pub accounts_block_adding_non_microsoft_account_email: Option<bool>,
    pub anti_theft_mode_blocked: Option<bool>,
    pub apps_allow_trusted_apps_sideloading: Option<StateManagementSetting>,
    pub apps_block_windows_store_originated_apps: Option<bool>,
    pub bluetooth_allowed_services: Option<Vec<String>>,
    pub bluetooth_block_advertising: Option<bool>,
    pub bluetooth_block_discoverable_mode: Option<bool>,
    pub bluetooth_blocked: Option<bool>,
    pub bluetooth_block_pre_pairing: Option<bool>,
    pub camera_blocked: Option<bool>,
    pub cellular_block_data_when_roaming: Option<bool>,
    pub cellular_block_vpn: Option<bool>,
    pub cellular_block_vpn_when_roaming: Option<bool>,
    pub certificates_block_manual_root_certificate_installation: Option<bool>,
    pub connected_devices_service_blocked: Option<bool>,
    pub copy_paste_blocked: Option<bool>,
    pub cortana_blocked: Option<bool>,
    pub defender_block_end_user_access: Option<bool>,
    pub defender_cloud_block_level: Option<DefenderCloudBlockLevelType>,
    pub defender_days_before_deleting_quarantined_malware: Option<i32>,
    pub defender_detected_malware_actions: Option<DefenderDetectedMalwareActions>,
    pub defender_file_extensions_to_exclude: Option<Vec<String>>,
    pub defender_files_and_folders_to_exclude: Option<Vec<String>>,
    pub defender_monitor_file_activity: Option<DefenderMonitorFileActivity>,
    pub defender_processes_to_exclude: Option<Vec<String>>,
    pub defender_prompt_for_sample_submission: Option<DefenderPromptForSampleSubmission>,
    pub defender_require_behavior_monitoring: Option<bool>,
    pub defender_require_cloud_protection: Option<bool>,
    pub defender_require_network_inspection_system: Option<bool>,
    pub defender_require_real_time_monitoring: Option<bool>,
    pub defender_scan_archive_files: Option<bool>,
    pub defender_scan_downloads: Option<bool>,
    pub defender_scan_incoming_mail: Option<bool>,
    pub defender_scan_mapped_network_drives_during_full_scan: Option<bool>,
    pub defender_scan_max_cpu: Option<i32>,
    pub defender_scan_network_files: Option<bool>,
    pub defender_scan_removable_drives_during_full_scan: Option<bool>,
    pub defender_scan_scripts_loaded_in_internet_explorer: Option<bool>,
    pub defender_scan_type: Option<DefenderScanType>,
    pub defender_scheduled_quick_scan_time: Option<TimeOnly>,
    pub defender_scheduled_scan_time: Option<TimeOnly>,
    pub defender_signature_update_interval_in_hours: Option<i32>,
    pub defender_system_scan_schedule: Option<WeeklySchedule>,
    pub developer_unlock_setting: Option<StateManagementSetting>,
    pub device_management_block_factory_reset_on_mobile: Option<bool>,
    pub device_management_block_manual_unenroll: Option<bool>,
    pub diagnostics_data_submission_mode: Option<DiagnosticDataSubmissionMode>,
    pub edge_allow_start_pages_modification: Option<bool>,
    pub edge_block_access_to_about_flags: Option<bool>,
    pub edge_block_address_bar_dropdown: Option<bool>,
    pub edge_block_autofill: Option<bool>,
    pub edge_block_compatibility_list: Option<bool>,
    pub edge_block_developer_tools: Option<bool>,
    pub edge_blocked: Option<bool>,
    pub edge_block_extensions: Option<bool>,
    pub edge_block_in_private_browsing: Option<bool>,
    pub edge_block_java_script: Option<bool>,
    pub edge_block_live_tile_data_collection: Option<bool>,
    pub edge_block_password_manager: Option<bool>,
    pub edge_block_popups: Option<bool>,
    pub edge_block_search_suggestions: Option<bool>,
    pub edge_block_sending_do_not_track_header: Option<bool>,
    pub edge_block_sending_intranet_traffic_to_internet_explorer: Option<bool>,
    pub edge_clear_browsing_data_on_exit: Option<bool>,
    pub edge_cookie_policy: Option<EdgeCookiePolicy>,
    pub edge_disable_first_run_page: Option<bool>,
    pub edge_enterprise_mode_site_list_location: Option<String>,
    pub edge_first_run_url: Option<String>,
    pub edge_homepage_urls: Option<Vec<String>>,
    pub edge_require_smart_screen: Option<bool>,
    pub edge_search_engine: Option<EdgeSearchEngineSetting>,
    pub edge_send_intranet_traffic_to_internet_explorer: Option<bool>,
    pub edge_sync_favorites_with_internet_explorer: Option<bool>,
    pub enterprise_cloud_print_discovery_end_point: Option<String>,
    pub enterprise_cloud_print_discovery_max_limit: Option<i32>,
    pub enterprise_cloud_print_mopria_discovery_resource_identifier: Option<String>,
    #[serde(rename = "enterpriseCloudPrintOAuthAuthority")]
    pub enterprise_cloud_print_oauth_authority: Option<String>,
    #[serde(rename = "enterpriseCloudPrintOAuthClientIdentifier")]
    pub enterprise_cloud_print_oauth_client_identifier: Option<String>,
    pub enterprise_cloud_print_resource_identifier: Option<String>,
    pub experience_block_device_discovery: Option<bool>,
    #[serde(rename = "experienceBlockErrorDialogWhenNoSIM")]
    pub experience_block_error_dialog_when_no_sim: Option<bool>,
    pub experience_block_task_switcher: Option<bool>,
    pub game_dvr_blocked: Option<bool>,
    pub internet_sharing_blocked: Option<bool>,
    pub location_services_blocked: Option<bool>,
    pub lock_screen_allow_timeout_configuration: Option<bool>,
    pub lock_screen_block_action_center_notifications: Option<bool>,
    pub lock_screen_block_cortana: Option<bool>,
    pub lock_screen_block_toast_notifications: Option<bool>,
    pub lock_screen_timeout_in_seconds: Option<i32>,
    pub logon_block_fast_user_switching: Option<bool>,
    pub microsoft_account_blocked: Option<bool>,
    pub microsoft_account_block_settings_sync: Option<bool>,
    pub network_proxy_apply_settings_device_wide: Option<bool>,
    pub network_proxy_automatic_configuration_url: Option<String>,
    pub network_proxy_disable_auto_detect: Option<bool>,
    pub network_proxy_server: Option<Windows10NetworkProxyServer>,
    pub nfc_blocked: Option<bool>,
    pub one_drive_disable_file_sync: Option<bool>,
    pub password_block_simple: Option<bool>,
    pub password_expiration_days: Option<i32>,
    pub password_minimum_character_set_count: Option<i32>,
    pub password_minimum_length: Option<i32>,
    pub password_minutes_of_inactivity_before_screen_timeout: Option<i32>,
    pub password_previous_password_block_count: Option<i32>,
    pub password_required: Option<bool>,
    pub password_required_type: Option<RequiredPasswordType>,
    pub password_require_when_resume_from_idle_state: Option<bool>,
    pub password_sign_in_failure_count_before_factory_reset: Option<i32>,
    pub personalization_desktop_image_url: Option<String>,
    pub personalization_lock_screen_image_url: Option<String>,
    pub privacy_advertising_id: Option<StateManagementSetting>,
    pub privacy_auto_accept_pairing_and_consent_prompts: Option<bool>,
    pub privacy_block_input_personalization: Option<bool>,
    pub reset_protection_mode_blocked: Option<bool>,
    pub safe_search_filter: Option<SafeSearchFilterType>,
    pub screen_capture_blocked: Option<bool>,
    pub search_block_diacritics: Option<bool>,
    pub search_disable_auto_language_detection: Option<bool>,
    pub search_disable_indexer_backoff: Option<bool>,
    pub search_disable_indexing_encrypted_items: Option<bool>,
    pub search_disable_indexing_removable_drive: Option<bool>,
    pub search_enable_automatic_index_size_manangement: Option<bool>,
    pub search_enable_remote_queries: Option<bool>,
    pub settings_block_accounts_page: Option<bool>,
    pub settings_block_add_provisioning_package: Option<bool>,
    pub settings_block_apps_page: Option<bool>,
    pub settings_block_change_language: Option<bool>,
    pub settings_block_change_power_sleep: Option<bool>,
    pub settings_block_change_region: Option<bool>,
    pub settings_block_change_system_time: Option<bool>,
    pub settings_block_devices_page: Option<bool>,
    pub settings_block_ease_of_access_page: Option<bool>,
    pub settings_block_edit_device_name: Option<bool>,
    pub settings_block_gaming_page: Option<bool>,
    pub settings_block_network_internet_page: Option<bool>,
    pub settings_block_personalization_page: Option<bool>,
    pub settings_block_privacy_page: Option<bool>,
    pub settings_block_remove_provisioning_package: Option<bool>,
    pub settings_block_settings_app: Option<bool>,
    pub settings_block_system_page: Option<bool>,
    pub settings_block_time_language_page: Option<bool>,
    pub settings_block_update_security_page: Option<bool>,
    pub shared_user_app_data_allowed: Option<bool>,
    pub smart_screen_block_prompt_override: Option<bool>,
    pub smart_screen_block_prompt_override_for_files: Option<bool>,
    pub smart_screen_enable_app_install_control: Option<bool>,
    pub start_block_unpinning_apps_from_taskbar: Option<bool>,
    pub start_menu_app_list_visibility: Option<WindowsStartMenuAppListVisibilityType>,
    pub start_menu_hide_change_account_settings: Option<bool>,
    pub start_menu_hide_frequently_used_apps: Option<bool>,
    pub start_menu_hide_hibernate: Option<bool>,
    pub start_menu_hide_lock: Option<bool>,
    pub start_menu_hide_power_button: Option<bool>,
    pub start_menu_hide_recent_jump_lists: Option<bool>,
    pub start_menu_hide_recently_added_apps: Option<bool>,
    pub start_menu_hide_restart_options: Option<bool>,
    pub start_menu_hide_shut_down: Option<bool>,
    pub start_menu_hide_sign_out: Option<bool>,
    pub start_menu_hide_sleep: Option<bool>,
    pub start_menu_hide_switch_account: Option<bool>,
    pub start_menu_hide_user_tile: Option<bool>,
    pub start_menu_layout_edge_assets_xml: Option<Base64Binary>,
    pub start_menu_layout_xml: Option<Base64Binary>,
    pub start_menu_mode: Option<WindowsStartMenuModeType>,
    pub start_menu_pinned_folder_documents: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_downloads: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_file_explorer: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_home_group: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_music: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_network: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_personal_folder: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_pictures: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_settings: Option<VisibilitySetting>,
    pub start_menu_pinned_folder_videos: Option<VisibilitySetting>,
    pub storage_block_removable_storage: Option<bool>,
    pub storage_require_mobile_device_encryption: Option<bool>,
    pub storage_restrict_app_data_to_system_volume: Option<bool>,
    pub storage_restrict_app_install_to_system_volume: Option<bool>,
    pub tenant_lockdown_require_network_during_out_of_box_experience: Option<bool>,
    pub usb_blocked: Option<bool>,
    pub voice_recording_blocked: Option<bool>,
    pub web_rtc_block_localhost_ip_address: Option<bool>,
    pub wi_fi_block_automatic_connect_hotspots: Option<bool>,
    pub wi_fi_blocked: Option<bool>,
    pub wi_fi_block_manual_configuration: Option<bool>,
    pub wi_fi_scan_interval: Option<i32>,
    pub windows_spotlight_block_consumer_specific_features: Option<bool>,
    pub windows_spotlight_blocked: Option<bool>,
    pub windows_spotlight_block_on_action_center: Option<bool>,
    pub windows_spotlight_block_tailored_experiences: Option<bool>,
    pub windows_spotlight_block_third_party_notifications: Option<bool>,
    pub windows_spotlight_block_welcome_experience: Option<bool>,
    pub windows_spotlight_block_windows_tips: Option<bool>,
    pub windows_spotlight_configure_on_lock_screen: Option<WindowsSpotlightEnablementSettings>,
    pub windows_store_block_auto_update: Option<bool>,
    pub windows_store_blocked: Option<bool>,
    pub windows_store_enable_private_store_only: Option<bool>,
    pub wireless_display_block_projection_to_this_device: Option<bool>,
    pub wireless_display_block_user_input_from_receiver: Option<bool>,
    pub wireless_display_require_pin_for_pairing: Option<bool>,
}

/// Endpoint protection settings for Windows 10 devices.
#[model(odata_type = "#microsoft.graph.windows10EndpointProtectionConfiguration")]
pub struct Windows10EndpointProtectionConfiguration {
    #[serde(flatten)]
    pub base: DeviceConfigurationFields,
    pub application_guard_allow_persistence: Option<bool>,
    pub application_guard_allow_print_to_local_printers: Option<bool>,
    pub application_guard_allow_print_to_network_printers: Option<bool>,
    #[serde(rename = "applicationGuardAllowPrintToPDF")]
    pub application_guard_allow_print_to_pdf: Option<bool>,
    #[serde(rename = "applicationGuardAllowPrintToXPS")]
    pub application_guard_allow_print_to_xps: Option<bool>,
    pub application_guard_block_clipboard_sharing: Option<ApplicationGuardBlockClipboardSharingType>,
    pub application_guard_block_file_transfer: Option<ApplicationGuardBlockFileTransferType>,
    pub application_guard_block_non_enterprise_content: Option<bool>,
    pub application_guard_enabled: Option<bool>,
    pub application_guard_force_auditing: Option<bool>,
    pub app_locker_application_control: Option<AppLockerApplicationControlType>,
    pub bit_locker_disable_warning_for_other_disk_encryption: Option<bool>,
    pub bit_locker_enable_storage_card_encryption_on_mobile: Option<bool>,
    pub bit_locker_encrypt_device: Option<bool>,
    pub bit_locker_removable_drive_policy: Option<BitLockerRemovableDrivePolicy>,
    pub defender_additional_guarded_folders: Option<Vec<String>>,
    pub defender_attack_surface_reduction_excluded_paths: Option<Vec<String>>,
    /// Exploit protection settings as an XML document.
    pub defender_exploit_protection_xml: Option<Base64Binary>,
    pub defender_exploit_protection_xml_file_name: Option<String>,
    pub defender_guarded_folders_allowed_app_paths: Option<Vec<String>>,
    pub defender_security_center_block_exploit_protection_override: Option<bool>,
    #[serde(rename = "firewallBlockStatefulFTP")]
    pub firewall_block_stateful_ftp: Option<bool>,
    pub firewall_certificate_revocation_list_check_method:
        Option<FirewallCertificateRevocationListCheckMethodType>,
    pub firewall_idle_timeout_for_security_association_in_seconds: Option<i32>,
    #[serde(rename = "firewallIPSecExemptionsAllowDHCP")]
    pub firewall_ip_sec_exemptions_allow_dhcp: Option<bool>,
    #[serde(rename = "firewallIPSecExemptionsAllowICMP")]
    pub firewall_ip_sec_exemptions_allow_icmp: Option<bool>,
    #[serde(rename = "firewallIPSecExemptionsAllowNeighborDiscovery")]
    pub firewall_ip_sec_exemptions_allow_neighbor_discovery: Option<bool>,
    #[serde(rename = "firewallIPSecExemptionsAllowRouterDiscovery")]
    pub firewall_ip_sec_exemptions_allow_router_discovery: Option<bool>,
    pub firewall_merge_keying_module_settings: Option<bool>,
    pub firewall_packet_queueing_method: Option<FirewallPacketQueueingMethodType>,
    pub firewall_pre_shared_key_encoding_method: Option<FirewallPreSharedKeyEncodingMethodType>,
    pub firewall_profile_domain: Option<WindowsFirewallNetworkProfile>,
    pub firewall_profile_private: Option<WindowsFirewallNetworkProfile>,
    pub firewall_profile_public: Option<WindowsFirewallNetworkProfile>,
    pub smart_screen_block_override_for_files: Option<bool>,
    pub smart_screen_enable_in_shell: Option<bool>,
}

/// An app in a visibility or compliance list.
#[model]
pub struct AppListItem {
    pub app_id: Option<String>,
    pub app_store_url: Option<String>,
    pub name: Option<String>,
    pub publisher: Option<String>,
}

#[model]
pub struct BitLockerRemovableDrivePolicy {
    pub block_cross_organization_write_access: Option<bool>,
    pub encryption_method: Option<BitLockerEncryptionMethod>,
    pub require_encryption_for_write_access: Option<bool>,
}

/// Firewall settings for one network profile.
#[model]
pub struct WindowsFirewallNetworkProfile {
    pub authorized_application_rules_from_group_policy_merged: Option<bool>,
    pub connection_security_rules_from_group_policy_merged: Option<bool>,
    pub firewall_enabled: Option<StateManagementSetting>,
    pub global_port_rules_from_group_policy_merged: Option<bool>,
    pub inbound_connections_blocked: Option<bool>,
    pub inbound_notifications_blocked: Option<bool>,
    pub incoming_traffic_blocked: Option<bool>,
    pub outbound_connections_blocked: Option<bool>,
    pub policy_rules_from_group_policy_merged: Option<bool>,
    pub secured_packet_exemption_allowed: Option<bool>,
    pub stealth_mode_blocked: Option<bool>,
    pub unicast_responses_to_multicast_broadcasts_blocked: Option<bool>,
}

/// Cellular data limits for a set of managed apps.
#[model]
pub struct IosNetworkUsageRule {
    pub cellular_data_blocked: Option<bool>,
    pub cellular_data_block_when_roaming: Option<bool>,
    pub managed_apps: Option<Vec<AppListItem>>,
}

/// What Defender does with malware of each severity.
#[model]
pub struct DefenderDetectedMalwareActions {
    pub high_severity: Option<DefenderThreatAction>,
    pub low_severity: Option<DefenderThreatAction>,
    pub moderate_severity: Option<DefenderThreatAction>,
    pub severe_severity: Option<DefenderThreatAction>,
}

#[model]
pub struct Windows10NetworkProxyServer {
    /// `host:port` of the proxy.
    pub address: Option<String>,
    pub exceptions: Option<Vec<String>>,
    pub use_for_local_addresses: Option<bool>,
}

#[model(odata_type = "#microsoft.graph.edgeSearchEngineBase")]
pub struct EdgeSearchEngineBase {}

define_family! {
    /// The Edge default search engine, either built in or read from an
    /// `OpenSearch` description.
    pub EdgeSearchEngineSetting(EdgeSearchEngineBase) {
        "#microsoft.graph.edgeSearchEngine" => EdgeSearchEngine,
        "#microsoft.graph.edgeSearchEngineCustom" => EdgeSearchEngineCustom,
    }
}

#[model(odata_type = "#microsoft.graph.edgeSearchEngine")]
pub struct EdgeSearchEngine {
    pub edge_search_engine_type: Option<EdgeSearchEngineType>,
}

#[model(odata_type = "#microsoft.graph.edgeSearchEngineCustom")]
pub struct EdgeSearchEngineCustom {
    pub edge_search_engine_open_search_xml_url: Option<String>,
}

/// Start menu app list settings, written on the wire as a comma-separated
/// member list such as `collapse,disableSettingsApp`.
///
/// Members keep the order they were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WindowsStartMenuAppListVisibilityType(Vec<StartMenuAppListVisibility>);

impl WindowsStartMenuAppListVisibilityType {
    pub fn new(members: impl IntoIterator<Item = StartMenuAppListVisibility>) -> Self {
        Self(members.into_iter().collect())
    }

    pub fn members(&self) -> &[StartMenuAppListVisibility] {
        &self.0
    }

    pub fn contains(&self, member: StartMenuAppListVisibility) -> bool {
        self.0.contains(&member)
    }
}

impl fmt::Display for WindowsStartMenuAppListVisibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, member) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(member.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for WindowsStartMenuAppListVisibilityType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Ok(Self::default());
        }
        input
            .split(',')
            .map(|member| match member.trim() {
                "userDefined" => Ok(StartMenuAppListVisibility::UserDefined),
                "collapse" => Ok(StartMenuAppListVisibility::Collapse),
                "remove" => Ok(StartMenuAppListVisibility::Remove),
                "disableSettingsApp" => Ok(StartMenuAppListVisibility::DisableSettingsApp),
                other => Err(format!("unknown start menu app list member `{other}`")),
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl Serialize for WindowsStartMenuAppListVisibilityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WindowsStartMenuAppListVisibilityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for WindowsStartMenuAppListVisibilityType {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "WindowsStartMenuAppListVisibilityType".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^(userDefined|collapse|remove|disableSettingsApp)(,(userDefined|collapse|remove|disableSettingsApp))*$"
        })
    }
}

/// One member of [`WindowsStartMenuAppListVisibilityType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartMenuAppListVisibility {
    UserDefined,
    Collapse,
    Remove,
    DisableSettingsApp,
}

impl StartMenuAppListVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserDefined => "userDefined",
            Self::Collapse => "collapse",
            Self::Remove => "remove",
            Self::DisableSettingsApp => "disableSettingsApp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AndroidWorkProfileRequiredPasswordType {
    DeviceDefault,
    LowSecurityBiometric,
    Required,
    AtLeastNumeric,
    NumericComplex,
    AtLeastAlphabetic,
    AtLeastAlphanumeric,
    AlphanumericWithSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AndroidWorkProfileCrossProfileDataSharingType {
    DeviceDefault,
    PreventAny,
    AllowPersonalToWork,
    NoRestrictions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AndroidWorkProfileDefaultAppPermissionPolicyType {
    DeviceDefault,
    Prompt,
    AutoGrant,
    AutoDeny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AppListType {
    None,
    AppsInListCompliant,
    AppsNotInListCompliant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RequiredPasswordType {
    DeviceDefault,
    Alphanumeric,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WebBrowserCookieSettings {
    BrowserDefault,
    BlockAlways,
    AllowCurrentWebSite,
    AllowFromWebsitesVisited,
    AllowAlways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DefenderCloudBlockLevelType {
    NotConfigured,
    High,
    HighPlus,
    ZeroTolerance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DefenderMonitorFileActivity {
    UserDefined,
    Disable,
    MonitorAllFiles,
    MonitorIncomingFilesOnly,
    MonitorOutgoingFilesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DefenderPromptForSampleSubmission {
    UserDefined,
    AlwaysPrompt,
    PromptBeforeSendingPersonalData,
    NeverSendData,
    SendAllDataWithoutPrompting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DefenderScanType {
    UserDefined,
    Disabled,
    Quick,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WeeklySchedule {
    UserDefined,
    Everyday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticDataSubmissionMode {
    UserDefined,
    None,
    Basic,
    Enhanced,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EdgeCookiePolicy {
    UserDefined,
    Allow,
    BlockThirdParty,
    BlockAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SafeSearchFilterType {
    UserDefined,
    Strict,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WindowsStartMenuModeType {
    UserDefined,
    FullScreen,
    NonFullScreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationGuardBlockClipboardSharingType {
    NotConfigured,
    BlockBoth,
    BlockHostToContainer,
    BlockContainerToHost,
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationGuardBlockFileTransferType {
    NotConfigured,
    BlockImageAndTextFile,
    BlockImageFile,
    BlockNone,
    BlockTextFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AppLockerApplicationControlType {
    NotConfigured,
    EnforceComponentsAndStoreApps,
    AuditComponentsAndStoreApps,
    EnforceComponentsStoreAppsAndSmartlocker,
    AuditComponentsStoreAppsAndSmartlocker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BitLockerEncryptionMethod {
    AesCbc128,
    AesCbc256,
    XtsAes128,
    XtsAes256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FirewallCertificateRevocationListCheckMethodType {
    DeviceDefault,
    None,
    Attempt,
    Require,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FirewallPacketQueueingMethodType {
    DeviceDefault,
    Disabled,
    QueueInbound,
    QueueOutbound,
    QueueBoth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FirewallPreSharedKeyEncodingMethodType {
    DeviceDefault,
    None,
    /// Serialized as `utF8`.
    UtF8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StateManagementSetting {
    NotConfigured,
    Blocked,
    Allowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DefenderThreatAction {
    DeviceDefault,
    Clean,
    Quarantine,
    Remove,
    Allow,
    UserDefined,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EdgeSearchEngineType {
    Default,
    Bing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum VisibilitySetting {
    NotConfigured,
    Hide,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WindowsSpotlightEnablementSettings {
    NotConfigured,
    Disabled,
    Enabled,
}
