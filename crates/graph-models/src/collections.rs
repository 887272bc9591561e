//! Named collection responses for entity sets.
//!
//! Each alias is a [`CollectionResponse`] over one model and is registered so
//! tooling can look it up by name like any other model.

use crate::{
    AccessPackageAssignmentPolicy, Application, CollectionResponse, DeviceConfiguration,
    DirectoryObject, MdmWindowsInformationProtectionPolicy, ServicePrincipal,
    WindowsInformationProtectionAppLockerFile, WindowsInformationProtectionPolicy,
};

macro_rules! collection_responses {
    ($($(#[$meta:meta])* $alias:ident => $item:ty,)+) => {
        $(
            $(#[$meta])*
            pub type $alias = CollectionResponse<$item>;

            crate::__private::inventory::submit! {
                crate::__private::ModelEntry {
                    name: stringify!($alias),
                    odata_type: None,
                    kind: crate::__private::ModelKind::Collection,
                    discriminators: &[],
                    roundtrip_fn: crate::__private::roundtrip_value::<$alias>,
                    summary_fn: crate::__private::summarize::<$alias>,
                    schema_fn: crate::__private::schema_value::<$alias>,
                    __sealed: crate::__private::sealed(),
                }
            }
        )+
    };
}

collection_responses! {
    AccessPackageAssignmentPolicyCollectionResponse => AccessPackageAssignmentPolicy,
    /// Pages of `/applications`.
    ApplicationCollectionResponse => Application,
    /// Pages of `/deviceManagement/deviceConfigurations`; items resolve by `@odata.type`.
    DeviceConfigurationCollectionResponse => DeviceConfiguration,
    DirectoryObjectCollectionResponse => DirectoryObject,
    MdmWindowsInformationProtectionPolicyCollectionResponse => MdmWindowsInformationProtectionPolicy,
    ServicePrincipalCollectionResponse => ServicePrincipal,
    WindowsInformationProtectionAppLockerFileCollectionResponse => WindowsInformationProtectionAppLockerFile,
    WindowsInformationProtectionPolicyCollectionResponse => WindowsInformationProtectionPolicy,
}
