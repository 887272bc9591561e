//! Directory objects: applications, service principals and the complex types
//! they carry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Base64Binary, DateTimeOffset, define_family, model};

/// Properties every directory object inherits.
#[model(fields)]
pub struct DirectoryObjectFields {
    pub id: Option<String>,
    pub deleted_date_time: Option<DateTimeOffset>,
}

/// A directory object with no more specific type.
#[model(odata_type = "#microsoft.graph.directoryObject")]
pub struct DirectoryObjectBase {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
}

define_family! {
    /// Any directory object, resolved from `@odata.type`.
    pub DirectoryObject(DirectoryObjectBase) {
        "#microsoft.graph.application" => Application,
        "#microsoft.graph.servicePrincipal" => ServicePrincipal,
        "#microsoft.graph.appRoleAssignment" => AppRoleAssignment,
        "#microsoft.graph.endpoint" => Endpoint,
        "#microsoft.graph.extensionProperty" => ExtensionProperty,
        "#microsoft.graph.claimsMappingPolicy" => ClaimsMappingPolicy,
        "#microsoft.graph.homeRealmDiscoveryPolicy" => HomeRealmDiscoveryPolicy,
        "#microsoft.graph.tokenIssuancePolicy" => TokenIssuancePolicy,
        "#microsoft.graph.tokenLifetimePolicy" => TokenLifetimePolicy,
    }
}

/// An application registration.
#[model(odata_type = "#microsoft.graph.application")]
pub struct Application {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
    pub add_ins: Option<Vec<AddIn>>,
    pub api: Option<ApiApplication>,
    pub app_id: Option<String>,
    pub application_template_id: Option<String>,
    pub app_roles: Option<Vec<AppRole>>,
    pub certification: Option<Certification>,
    pub created_date_time: Option<DateTimeOffset>,
    pub created_on_behalf_of: Option<Box<DirectoryObject>>,
    pub default_redirect_uri: Option<String>,
    pub description: Option<String>,
    pub disabled_by_microsoft_status: Option<String>,
    pub display_name: Option<String>,
    pub extension_properties: Option<Vec<ExtensionProperty>>,
    pub federated_identity_credentials: Option<Vec<FederatedIdentityCredential>>,
    pub group_membership_claims: Option<String>,
    pub home_realm_discovery_policies: Option<Vec<HomeRealmDiscoveryPolicy>>,
    pub identifier_uris: Option<Vec<String>>,
    pub info: Option<InformationalUrl>,
    pub is_device_only_auth_supported: Option<bool>,
    pub is_fallback_public_client: Option<bool>,
    pub key_credentials: Option<Vec<KeyCredential>>,
    /// Main logo, as raw image bytes.
    pub logo: Option<Base64Binary>,
    pub notes: Option<String>,
    pub oauth2_require_post_response: Option<bool>,
    pub optional_claims: Option<OptionalClaims>,
    pub owners: Option<Vec<DirectoryObject>>,
    pub parental_control_settings: Option<ParentalControlSettings>,
    pub password_credentials: Option<Vec<PasswordCredential>>,
    pub public_client: Option<PublicClientApplication>,
    pub publisher_domain: Option<String>,
    pub required_resource_access: Option<Vec<RequiredResourceAccess>>,
    pub saml_metadata_url: Option<String>,
    pub service_management_reference: Option<String>,
    pub sign_in_audience: Option<String>,
    pub spa: Option<SpaApplication>,
    pub tags: Option<Vec<String>>,
    pub token_encryption_key_id: Option<Uuid>,
    pub token_issuance_policies: Option<Vec<TokenIssuancePolicy>>,
    pub token_lifetime_policies: Option<Vec<TokenLifetimePolicy>>,
    pub verified_publisher: Option<VerifiedPublisher>,
    pub web: Option<WebApplication>,
}

/// An instance of an application in a tenant.
#[model(odata_type = "#microsoft.graph.servicePrincipal")]
pub struct ServicePrincipal {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
    pub account_enabled: Option<bool>,
    pub add_ins: Option<Vec<AddIn>>,
    pub alternative_names: Option<Vec<String>>,
    pub app_description: Option<String>,
    pub app_display_name: Option<String>,
    pub app_id: Option<String>,
    pub application_template_id: Option<String>,
    pub app_owner_organization_id: Option<Uuid>,
    pub app_role_assigned_to: Option<Vec<AppRoleAssignment>>,
    pub app_role_assignment_required: Option<bool>,
    pub app_role_assignments: Option<Vec<AppRoleAssignment>>,
    pub app_roles: Option<Vec<AppRole>>,
    pub claims_mapping_policies: Option<Vec<ClaimsMappingPolicy>>,
    pub created_objects: Option<Vec<DirectoryObject>>,
    pub delegated_permission_classifications: Option<Vec<DelegatedPermissionClassification>>,
    pub description: Option<String>,
    pub disabled_by_microsoft_status: Option<String>,
    pub display_name: Option<String>,
    pub endpoints: Option<Vec<Endpoint>>,
    pub federated_identity_credentials: Option<Vec<FederatedIdentityCredential>>,
    pub homepage: Option<String>,
    pub home_realm_discovery_policies: Option<Vec<HomeRealmDiscoveryPolicy>>,
    pub info: Option<InformationalUrl>,
    pub key_credentials: Option<Vec<KeyCredential>>,
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
    pub member_of: Option<Vec<DirectoryObject>>,
    pub notes: Option<String>,
    pub notification_email_addresses: Option<Vec<String>>,
    pub oauth2_permission_grants: Option<Vec<OAuth2PermissionGrant>>,
    pub oauth2_permission_scopes: Option<Vec<PermissionScope>>,
    pub owned_objects: Option<Vec<DirectoryObject>>,
    pub owners: Option<Vec<DirectoryObject>>,
    pub password_credentials: Option<Vec<PasswordCredential>>,
    pub preferred_single_sign_on_mode: Option<String>,
    pub preferred_token_signing_key_thumbprint: Option<String>,
    pub reply_urls: Option<Vec<String>>,
    pub resource_specific_application_permissions: Option<Vec<ResourceSpecificPermission>>,
    pub saml_single_sign_on_settings: Option<SamlSingleSignOnSettings>,
    pub service_principal_names: Option<Vec<String>>,
    pub service_principal_type: Option<String>,
    pub sign_in_audience: Option<String>,
    pub tags: Option<Vec<String>>,
    pub token_encryption_key_id: Option<Uuid>,
    pub token_issuance_policies: Option<Vec<TokenIssuancePolicy>>,
    pub token_lifetime_policies: Option<Vec<TokenLifetimePolicy>>,
    pub transitive_member_of: Option<Vec<DirectoryObject>>,
    pub verified_publisher: Option<VerifiedPublisher>,
}

/// A certificate credential.
#[model]
pub struct KeyCredential {
    pub custom_key_identifier: Option<Base64Binary>,
    pub display_name: Option<String>,
    pub end_date_time: Option<DateTimeOffset>,
    pub key: Option<Base64Binary>,
    pub key_id: Option<Uuid>,
    pub start_date_time: Option<DateTimeOffset>,
    /// `AsymmetricX509Cert` or `X509CertAndPassword`.
    pub r#type: Option<String>,
    /// `Verify` or `Sign`.
    pub usage: Option<String>,
}

/// A client secret.
#[model]
pub struct PasswordCredential {
    pub custom_key_identifier: Option<Base64Binary>,
    pub display_name: Option<String>,
    pub end_date_time: Option<DateTimeOffset>,
    /// First three characters of the secret.
    pub hint: Option<String>,
    pub key_id: Option<Uuid>,
    /// Only returned when the secret is created.
    pub secret_text: Option<String>,
    pub start_date_time: Option<DateTimeOffset>,
}

#[model]
pub struct AppRole {
    pub allowed_member_types: Option<Vec<String>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub id: Option<Uuid>,
    pub is_enabled: Option<bool>,
    pub origin: Option<String>,
    pub value: Option<String>,
}

/// A delegated permission exposed by an API.
#[model]
pub struct PermissionScope {
    pub admin_consent_description: Option<String>,
    pub admin_consent_display_name: Option<String>,
    pub id: Option<Uuid>,
    pub is_enabled: Option<bool>,
    pub origin: Option<String>,
    pub r#type: Option<String>,
    pub user_consent_description: Option<String>,
    pub user_consent_display_name: Option<String>,
    pub value: Option<String>,
}

#[model]
pub struct ApiApplication {
    pub accept_mapped_claims: Option<bool>,
    pub known_client_applications: Option<Vec<Uuid>>,
    pub oauth2_permission_scopes: Option<Vec<PermissionScope>>,
    pub pre_authorized_applications: Option<Vec<PreAuthorizedApplication>>,
    pub requested_access_token_version: Option<i32>,
}

#[model]
pub struct PreAuthorizedApplication {
    pub app_id: Option<String>,
    pub delegated_permission_ids: Option<Vec<String>>,
}

#[model]
pub struct InformationalUrl {
    pub logo_url: Option<String>,
    pub marketing_url: Option<String>,
    pub privacy_statement_url: Option<String>,
    pub support_url: Option<String>,
    pub terms_of_service_url: Option<String>,
}

#[model]
pub struct PublicClientApplication {
    pub redirect_uris: Option<Vec<String>>,
}

#[model]
pub struct SpaApplication {
    pub redirect_uris: Option<Vec<String>>,
}

#[model]
pub struct WebApplication {
    pub home_page_url: Option<String>,
    pub implicit_grant_settings: Option<ImplicitGrantSettings>,
    pub logout_url: Option<String>,
    pub redirect_uris: Option<Vec<String>>,
}

#[model]
pub struct ImplicitGrantSettings {
    pub enable_access_token_issuance: Option<bool>,
    pub enable_id_token_issuance: Option<bool>,
}

/// Permissions an application needs on one resource.
#[model]
pub struct RequiredResourceAccess {
    pub resource_access: Option<Vec<ResourceAccess>>,
    pub resource_app_id: Option<String>,
}

#[model]
pub struct ResourceAccess {
    pub id: Option<Uuid>,
    /// `Scope` for delegated permissions, `Role` for app roles.
    pub r#type: Option<String>,
}

#[model]
pub struct VerifiedPublisher {
    pub added_date_time: Option<DateTimeOffset>,
    pub display_name: Option<String>,
    pub verified_publisher_id: Option<String>,
}

/// Grants a user, group or service principal one app role on a resource.
#[model(odata_type = "#microsoft.graph.appRoleAssignment")]
pub struct AppRoleAssignment {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
    /// All zeros for the default role.
    pub app_role_id: Option<Uuid>,
    pub created_date_time: Option<DateTimeOffset>,
    pub principal_display_name: Option<String>,
    pub principal_id: Option<Uuid>,
    /// `User`, `Group` or `ServicePrincipal`.
    pub principal_type: Option<String>,
    pub resource_display_name: Option<String>,
    pub resource_id: Option<Uuid>,
}

#[model(odata_type = "#microsoft.graph.endpoint")]
pub struct Endpoint {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
    pub capability: Option<String>,
    pub provider_id: Option<String>,
    pub provider_name: Option<String>,
    pub provider_resource_id: Option<String>,
    pub uri: Option<String>,
}

/// A directory extension attribute registered by an application.
#[model(odata_type = "#microsoft.graph.extensionProperty")]
pub struct ExtensionProperty {
    #[serde(flatten)]
    pub base: DirectoryObjectFields,
    pub app_display_name: Option<String>,
    /// `Binary`, `Boolean`, `DateTime`, `Integer`, `LargeInteger` or `String`.
    pub data_type: Option<String>,
    pub is_multi_valued: Option<bool>,
    pub is_synced_from_on_premises: Option<bool>,
    /// `extension_{appId}_{name}`.
    pub name: Option<String>,
    pub target_objects: Option<Vec<String>>,
}

/// Properties shared by the token and discovery policies.
#[model(fields)]
pub struct StsPolicyFields {
    pub id: Option<String>,
    pub deleted_date_time: Option<DateTimeOffset>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub applies_to: Option<Vec<DirectoryObject>>,
    /// JSON policy documents, each serialized as a string.
    pub definition: Option<Vec<String>>,
    pub is_organization_default: Option<bool>,
}

#[model(odata_type = "#microsoft.graph.claimsMappingPolicy")]
pub struct ClaimsMappingPolicy {
    #[serde(flatten)]
    pub base: StsPolicyFields,
}

#[model(odata_type = "#microsoft.graph.homeRealmDiscoveryPolicy")]
pub struct HomeRealmDiscoveryPolicy {
    #[serde(flatten)]
    pub base: StsPolicyFields,
}

#[model(odata_type = "#microsoft.graph.tokenIssuancePolicy")]
pub struct TokenIssuancePolicy {
    #[serde(flatten)]
    pub base: StsPolicyFields,
}

#[model(odata_type = "#microsoft.graph.tokenLifetimePolicy")]
pub struct TokenLifetimePolicy {
    #[serde(flatten)]
    pub base: StsPolicyFields,
}

/// Trusts tokens from an external identity provider for an app.
#[model(odata_type = "#microsoft.graph.federatedIdentityCredential")]
pub struct FederatedIdentityCredential {
    pub id: Option<String>,
    pub audiences: Option<Vec<String>>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub name: Option<String>,
    pub subject: Option<String>,
}

#[model(odata_type = "#microsoft.graph.delegatedPermissionClassification")]
pub struct DelegatedPermissionClassification {
    pub id: Option<String>,
    pub classification: Option<PermissionClassificationType>,
    pub permission_id: Option<String>,
    pub permission_name: Option<String>,
}

/// Delegated permissions granted to a client on a resource.
#[model(odata_type = "#microsoft.graph.oAuth2PermissionGrant")]
pub struct OAuth2PermissionGrant {
    pub id: Option<String>,
    pub client_id: Option<String>,
    /// `AllPrincipals` or `Principal`.
    pub consent_type: Option<String>,
    pub principal_id: Option<String>,
    pub resource_id: Option<String>,
    /// Space-separated permission values.
    pub scope: Option<String>,
}

/// Custom behavior an app exposes in an Office host, such as a file handler.
#[model]
pub struct AddIn {
    pub id: Option<Uuid>,
    pub properties: Option<Vec<KeyValue>>,
    pub r#type: Option<String>,
}

#[model]
pub struct KeyValue {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[model]
pub struct Certification {
    pub certification_details_url: Option<String>,
    pub certification_expiration_date_time: Option<DateTimeOffset>,
    pub is_certified_by_microsoft: Option<bool>,
    pub is_publisher_attested: Option<bool>,
    pub last_certification_date_time: Option<DateTimeOffset>,
}

/// Extra claims requested in each token type.
#[model]
pub struct OptionalClaims {
    pub access_token: Option<Vec<OptionalClaim>>,
    pub id_token: Option<Vec<OptionalClaim>>,
    pub saml2_token: Option<Vec<OptionalClaim>>,
}

#[model]
pub struct OptionalClaim {
    pub additional_properties: Option<Vec<String>>,
    pub essential: Option<bool>,
    pub name: Option<String>,
    pub source: Option<String>,
}

#[model]
pub struct ParentalControlSettings {
    /// ISO 3166 country codes.
    pub countries_blocked_for_minors: Option<Vec<String>>,
    pub legal_age_group_rule: Option<String>,
}

#[model]
pub struct ResourceSpecificPermission {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub id: Option<Uuid>,
    pub is_enabled: Option<bool>,
    pub value: Option<String>,
}

#[model]
pub struct SamlSingleSignOnSettings {
    pub relay_state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PermissionClassificationType {
    Low,
    Medium,
    High,
    UnknownFutureValue,
}
