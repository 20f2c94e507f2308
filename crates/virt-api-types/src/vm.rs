// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The VM document and the VM-like entities that wrap it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::devices::{Disk, Interface};
use crate::storage::DataVolumeTemplate;
use crate::volumes::Volume;

/// Identifying metadata for a named object.
#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    pub name: String,
}

/// A virtual machine's desired configuration. The nesting mirrors the
/// document exactly: patch paths are pointers into this structure.
#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct VirtualMachine {
    pub metadata: Metadata,
    pub spec: VmSpec,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VmSpec {
    /// The instance stamped out when the VM runs. Lives at `/spec/template`.
    pub template: InstanceTemplate,

    /// Embedded provisioning templates for data-volume-backed volumes. Lives
    /// at `/spec/dataVolumeTemplates`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_volume_templates: Option<Vec<DataVolumeTemplate>>,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct InstanceTemplate {
    pub spec: InstanceSpec,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct InstanceSpec {
    pub domain: DomainSpec,

    /// The storage sources available to the domain's disks. Lives at
    /// `/spec/template/spec/volumes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct DomainSpec {
    pub devices: Devices,
}

#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct Devices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<Disk>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<Interface>>,
}

/// A template that stamps out VM documents. The embedded VMs live under the
/// template's `/objects` list.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VmTemplate {
    pub metadata: Metadata,
    pub objects: Vec<VirtualMachine>,
}

/// Either a single VM document or a template wrapping zero or more of them.
/// The kind discriminator travels out of band, so the serialized forms are
/// distinguished by shape alone.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum VmLikeEntity {
    VirtualMachine(VirtualMachine),
    Template(VmTemplate),
}
