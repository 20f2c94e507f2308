// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data volume provisioning: standalone data volume descriptions and the
//! embeddable template form a VM document carries in its
//! `/spec/dataVolumeTemplates` list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vm::Metadata;

/// A description of externally provisioned storage, as supplied by the
/// editor when a new disk is backed by fresh storage.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DataVolume {
    pub metadata: Metadata,
    pub spec: DataVolumeSpec,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataVolumeSpec {
    /// Where the volume's initial contents come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DataVolumeSource>,

    /// The storage to provision for the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageSpec>,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DataVolumeSource {
    /// Start from empty storage.
    Blank(BlankSource),

    /// Import the contents from a URL.
    Http(HttpSource),

    /// Clone an existing persistent volume claim.
    Pvc(PvcSource),
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct BlankSource {}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HttpSource {
    pub url: String,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PvcSource {
    pub namespace: String,
    pub name: String,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StorageSpec {
    /// The requested capacity, e.g. `10Gi`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// The storage class to provision from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
}

/// The embeddable form of a data volume, carried in the VM document's
/// template list. Provisioning is tied 1:1 to the volume that references it
/// by name.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DataVolumeTemplate {
    pub metadata: Metadata,
    pub spec: DataVolumeSpec,
}

impl From<&DataVolume> for DataVolumeTemplate {
    /// Converts a data volume description into the form embeddable in a VM
    /// document. The template keeps the data volume's name and spec.
    fn from(data_volume: &DataVolume) -> Self {
        Self {
            metadata: Metadata { name: data_volume.metadata.name.clone() },
            spec: data_volume.spec.clone(),
        }
    }
}
