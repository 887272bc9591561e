//! Entitlement management: access package assignment policies, their approval
//! stages, and the subject sets that name approvers and requestors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{DateTimeOffset, IsoDuration, define_family, model};

/// A subject set with no more specific type.
#[model(odata_type = "#microsoft.graph.subjectSet")]
pub struct SubjectSetBase {}

define_family! {
    /// Who may approve, request or sponsor, resolved from `@odata.type`.
    pub SubjectSet(SubjectSetBase) {
        "#microsoft.graph.attributeRuleMembers" => AttributeRuleMembers,
        "#microsoft.graph.connectedOrganizationMembers" => ConnectedOrganizationMembers,
        "#microsoft.graph.externalSponsors" => ExternalSponsors,
        "#microsoft.graph.groupMembers" => GroupMembers,
        "#microsoft.graph.internalSponsors" => InternalSponsors,
        "#microsoft.graph.requestorManager" => RequestorManager,
        "#microsoft.graph.singleServicePrincipal" => SingleServicePrincipal,
        "#microsoft.graph.singleUser" => SingleUser,
        "#microsoft.graph.targetApplicationOwners" => TargetApplicationOwners,
        "#microsoft.graph.targetManager" => TargetManager,
    }
}

/// Users matching a membership rule.
#[model(odata_type = "#microsoft.graph.attributeRuleMembers")]
pub struct AttributeRuleMembers {
    pub description: Option<String>,
    pub membership_rule: Option<String>,
}

#[model(odata_type = "#microsoft.graph.connectedOrganizationMembers")]
pub struct ConnectedOrganizationMembers {
    pub connected_organization_id: Option<String>,
    pub description: Option<String>,
}

#[model(odata_type = "#microsoft.graph.externalSponsors")]
pub struct ExternalSponsors {}

#[model(odata_type = "#microsoft.graph.groupMembers")]
pub struct GroupMembers {
    pub description: Option<String>,
    pub group_id: Option<String>,
}

#[model(odata_type = "#microsoft.graph.internalSponsors")]
pub struct InternalSponsors {}

/// The requestor's manager, `manager_level` levels up.
#[model(odata_type = "#microsoft.graph.requestorManager")]
pub struct RequestorManager {
    pub manager_level: Option<i32>,
}

#[model(odata_type = "#microsoft.graph.singleServicePrincipal")]
pub struct SingleServicePrincipal {
    pub description: Option<String>,
    pub service_principal_id: Option<String>,
}

#[model(odata_type = "#microsoft.graph.singleUser")]
pub struct SingleUser {
    pub description: Option<String>,
    pub user_id: Option<String>,
}

#[model(odata_type = "#microsoft.graph.targetApplicationOwners")]
pub struct TargetApplicationOwners {}

#[model(odata_type = "#microsoft.graph.targetManager")]
pub struct TargetManager {
    pub manager_level: Option<i32>,
}

/// One stage of an approval chain.
#[model(odata_type = "#microsoft.graph.accessPackageApprovalStage")]
pub struct AccessPackageApprovalStage {
    /// How long a request waits before it is denied.
    pub duration_before_automatic_denial: Option<IsoDuration>,
    pub duration_before_escalation: Option<IsoDuration>,
    pub escalation_approvers: Option<Vec<SubjectSet>>,
    pub fallback_escalation_approvers: Option<Vec<SubjectSet>>,
    pub fallback_primary_approvers: Option<Vec<SubjectSet>>,
    pub is_approver_justification_required: Option<bool>,
    pub is_escalation_enabled: Option<bool>,
    pub primary_approvers: Option<Vec<SubjectSet>>,
}

#[model(odata_type = "#microsoft.graph.accessPackageAssignmentApprovalSettings")]
pub struct AccessPackageAssignmentApprovalSettings {
    pub is_approval_required_for_add: Option<bool>,
    pub is_approval_required_for_update: Option<bool>,
    pub is_requestor_justification_required: Option<bool>,
    pub stages: Option<Vec<AccessPackageApprovalStage>>,
}

#[model(odata_type = "#microsoft.graph.accessPackageAssignmentRequestorSettings")]
pub struct AccessPackageAssignmentRequestorSettings {
    pub allow_custom_assignment_schedule: Option<bool>,
    pub enable_on_behalf_requestors_to_add_access: Option<bool>,
    pub enable_on_behalf_requestors_to_remove_access: Option<bool>,
    pub enable_on_behalf_requestors_to_update_access: Option<bool>,
    pub enable_targets_to_self_add_access: Option<bool>,
    pub enable_targets_to_self_remove_access: Option<bool>,
    pub enable_targets_to_self_update_access: Option<bool>,
    pub on_behalf_requestors: Option<Vec<SubjectSet>>,
}

/// Who may request an access package, and how requests are approved.
#[model(odata_type = "#microsoft.graph.accessPackageAssignmentPolicy")]
pub struct AccessPackageAssignmentPolicy {
    pub id: Option<String>,
    pub allowed_target_scope: Option<AllowedTargetScope>,
    pub created_date_time: Option<DateTimeOffset>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub modified_date_time: Option<DateTimeOffset>,
    pub requestor_settings: Option<AccessPackageAssignmentRequestorSettings>,
    pub request_approval_settings: Option<AccessPackageAssignmentApprovalSettings>,
    pub specific_allowed_targets: Option<Vec<SubjectSet>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AllowedTargetScope {
    NotSpecified,
    SpecificDirectoryUsers,
    SpecificConnectedOrganizationUsers,
    SpecificDirectoryServicePrincipals,
    AllMemberUsers,
    AllDirectoryUsers,
    AllDirectoryServicePrincipals,
    AllConfiguredConnectedOrganizationUsers,
    AllExternalUsers,
    UnknownFutureValue,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{AdditionalDataHolder, Model, ModelError, codec, diff};

    #[test]
    fn test_single_user_tag_decodes_single_user_variant() {
        // Act
        let set: SubjectSet =
            codec::decode(r##"{"@odata.type":"#microsoft.graph.singleUser"}"##).expect("decode");

        // Assert
        let SubjectSet::SingleUser(user) = set else {
            panic!("expected the SingleUser variant, got {}", set.variant_name());
        };
        assert_eq!(user.odata_type.as_deref(), Some("#microsoft.graph.singleUser"));
        assert_eq!(user.user_id, None);
    }

    #[test]
    fn test_every_listed_tag_selects_its_variant() {
        for tag in SubjectSet::DISCRIMINATORS {
            // Act
            let set = SubjectSet::from_value(json!({"@odata.type": tag})).expect("decode");

            // Assert
            assert!(!matches!(set, SubjectSet::Base(_)), "{tag} fell back to base");
            assert_eq!(set.odata_type(), Some(*tag));
        }
        assert_eq!(SubjectSet::DISCRIMINATORS.len(), 10);
    }

    #[test]
    fn test_unknown_absent_and_base_tags_fall_back_to_base() {
        // Arrange
        let inputs = [
            json!({"@odata.type": "#microsoft.graph.futureSubjectKind", "extra": 1}),
            json!({"description": "no tag"}),
            json!({"@odata.type": null}),
            json!({"@odata.type": "#microsoft.graph.subjectSet"}),
        ];

        for input in inputs {
            // Act
            let set = SubjectSet::from_value(input.clone()).expect("decode");

            // Assert
            assert!(matches!(set, SubjectSet::Base(_)), "{input} did not fall back");
        }
    }

    #[test]
    fn test_fallback_keeps_unknown_tag_and_properties() {
        // Arrange
        let input = json!({
            "@odata.type": "#microsoft.graph.futureSubjectKind",
            "description": "from the future",
            "ruleId": 7
        });

        // Act
        let set = SubjectSet::from_value(input.clone()).expect("decode");
        let output = codec::encode_value(&set).expect("encode");

        // Assert
        assert_eq!(set.odata_type(), Some("#microsoft.graph.futureSubjectKind"));
        assert_eq!(set.additional_data().len(), 2);
        assert_eq!(output, input);
    }

    #[test]
    fn test_non_object_and_non_string_tag_are_errors() {
        // Act
        let not_object = SubjectSet::from_value(json!([1])).expect_err("array must fail");
        let bad_tag = SubjectSet::from_value(json!({"@odata.type": 5})).expect_err("number tag must fail");

        // Assert
        assert!(matches!(not_object, ModelError::NotAnObject { found: "an array", .. }));
        assert!(matches!(bad_tag, ModelError::InvalidDiscriminator { found: "a number", .. }));
    }

    #[test]
    fn test_approval_stage_roundtrips_custom_unknown_field() {
        // Arrange
        let input = json!({"isEscalationEnabled": true, "customUnknownField": 42});

        // Act
        let stage: AccessPackageApprovalStage = codec::decode_value(input.clone()).expect("decode");
        let output = codec::encode_value(&stage).expect("encode");

        // Assert
        assert_eq!(stage.is_escalation_enabled, Some(true));
        assert_eq!(stage.additional_value("customUnknownField"), Some(&json!(42)));
        assert_eq!(output, input);
    }

    #[test]
    fn test_approval_stage_omitted_properties_read_as_absent() {
        let stage: AccessPackageApprovalStage = codec::decode("{}").expect("decode");

        assert_eq!(stage.odata_type, None);
        assert_eq!(stage.duration_before_automatic_denial, None);
        assert_eq!(stage.primary_approvers, None);
        assert_eq!(stage.is_escalation_enabled, None);
        assert!(stage.additional_data.is_empty());
    }

    #[test]
    fn test_approval_stage_decodes_durations_and_approvers() {
        // Arrange
        let input = json!({
            "@odata.type": "#microsoft.graph.accessPackageApprovalStage",
            "durationBeforeAutomaticDenial": "P2D",
            "durationBeforeEscalation": "PT12H",
            "isApproverJustificationRequired": false,
            "primaryApprovers": [
                {"@odata.type": "#microsoft.graph.requestorManager", "managerLevel": 1},
                {"@odata.type": "#microsoft.graph.groupMembers", "groupId": "g-1", "description": "Approvers"}
            ],
            "fallbackPrimaryApprovers": []
        });

        // Act
        let stage: AccessPackageApprovalStage = codec::decode_value(input.clone()).expect("decode");
        let output = codec::encode_value(&stage).expect("encode");

        // Assert
        assert_eq!(stage.duration_before_automatic_denial, Some(IsoDuration::from_days(2)));
        assert_eq!(stage.duration_before_escalation, Some(IsoDuration::from_hours(12)));
        let approvers = stage.primary_approvers.unwrap_or_default();
        assert!(matches!(
            &approvers[0],
            SubjectSet::RequestorManager(RequestorManager { manager_level: Some(1), .. })
        ));
        assert!(matches!(&approvers[1], SubjectSet::GroupMembers(_)));
        assert_eq!(stage.fallback_primary_approvers, Some(Vec::new()));
        assert!(diff::semantically_equal(&input, &output));
    }

    #[test]
    fn test_approval_stage_durations_print_as_written() {
        // Arrange
        let input = json!({
            "durationBeforeAutomaticDenial": "P1DT0H",
            "durationBeforeEscalation": "PT1.50S"
        });

        // Act
        let stage: AccessPackageApprovalStage = codec::decode_value(input.clone()).expect("decode");
        let output = codec::encode_value(&stage).expect("encode");

        // Assert
        assert_eq!(stage.duration_before_automatic_denial, Some(IsoDuration::from_days(1)));
        assert!(diff::diff(&input, &output).is_empty(), "{output}");
    }

    #[test]
    fn test_invalid_duration_fails_decode() {
        let input = json!({"durationBeforeEscalation": "12 hours"});

        let error = codec::decode_value::<AccessPackageApprovalStage>(input).expect_err("must fail");

        assert!(matches!(
            error,
            ModelError::Decode { ref type_name, .. } if type_name == "AccessPackageApprovalStage"
        ));
    }

    #[test]
    fn test_explicit_null_is_dropped_and_reported_lossless() {
        // Arrange
        let input = json!({"isEscalationEnabled": null, "customNull": null});

        // Act
        let output = codec::roundtrip_value::<AccessPackageApprovalStage>(input.clone()).expect("roundtrip");
        let divergences = diff::diff(&input, &output);

        // Assert
        assert_eq!(output, json!({"customNull": null}));
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].pointer, "/isEscalationEnabled");
        assert!(diff::is_lossless(&divergences));
    }

    #[test]
    fn test_policy_decodes_enum_and_nested_settings() {
        // Arrange
        let input = json!({
            "id": "p-1",
            "allowedTargetScope": "allDirectoryUsers",
            "requestorSettings": {
                "enableTargetsToSelfAddAccess": true,
                "onBehalfRequestors": [{"@odata.type": "#microsoft.graph.internalSponsors"}]
            },
            "requestApprovalSettings": {
                "isApprovalRequiredForAdd": true,
                "stages": [{"isEscalationEnabled": false, "customUnknownField": 42}]
            }
        });

        // Act
        let policy: AccessPackageAssignmentPolicy = codec::decode_value(input.clone()).expect("decode");
        let output = codec::encode_value(&policy).expect("encode");

        // Assert
        assert_eq!(policy.allowed_target_scope, Some(AllowedTargetScope::AllDirectoryUsers));
        let requestors = policy
            .requestor_settings
            .as_ref()
            .and_then(|settings| settings.on_behalf_requestors.as_deref())
            .unwrap_or_default();
        assert!(matches!(requestors[0], SubjectSet::InternalSponsors(_)));
        assert_eq!(output, input);
    }

    #[test]
    fn test_unknown_enum_value_fails_decode() {
        let input = json!({"allowedTargetScope": "everyoneEverywhere"});

        let error = codec::decode_value::<AccessPackageAssignmentPolicy>(input).expect_err("must fail");

        assert!(error.to_string().contains("everyoneEverywhere"));
    }

    #[test]
    fn test_subject_set_schema_lists_every_variant() {
        // Act
        let schema = codec::schema_value::<SubjectSet>().expect("schema");

        // Assert
        let any_of = schema
            .get("anyOf")
            .and_then(|value| value.as_array())
            .expect("family schema should be anyOf");
        assert_eq!(any_of.len(), 11);
    }
}
