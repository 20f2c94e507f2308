// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume configuration data: the named storage sources that disks reference
//! by shared name.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named storage source. The disk with the same name is backed by this
/// volume.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// The name of this volume. Unique within the document's volume list.
    pub name: String,

    /// Where the volume's contents come from. Serialized as a single
    /// source-specific key on the volume object (e.g. `dataVolume`).
    #[serde(flatten)]
    pub source: VolumeSource,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum VolumeSource {
    /// Backed by a data volume provisioned through the document's template
    /// list.
    DataVolume(DataVolumeVolumeSource),

    /// Backed by an ephemeral container image.
    ContainerDisk(ContainerDiskVolumeSource),

    /// Backed by an existing persistent volume claim.
    PersistentVolumeClaim(PersistentVolumeClaimVolumeSource),
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DataVolumeVolumeSource {
    /// The name of the referenced data volume. A data volume template with
    /// this name must be embedded in the same document.
    pub name: String,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContainerDiskVolumeSource {
    /// The container image holding the disk contents.
    pub image: String,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersistentVolumeClaimVolumeSource {
    /// The name of the claim to attach.
    pub claim_name: String,
}
