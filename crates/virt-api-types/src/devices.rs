// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration data: the guest-visible devices declared in a VM
//! document's domain.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A storage device attached to a VM's domain.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    /// The name of this disk. Unique within the document's disk list and
    /// shared with the volume that backs it.
    pub name: String,

    /// This device's position in the guest firmware's boot order. Boot
    /// orders form a single numbering space with network interfaces: the
    /// declared values are a contiguous sequence starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_order: Option<u32>,

    /// How the device is exposed to the guest.
    #[serde(flatten)]
    pub device: DiskDevice,
}

/// The guest-visible form of a storage device.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DiskDevice {
    /// An ordinary disk.
    Disk(DiskTarget),

    /// A CD-ROM drive.
    Cdrom(DiskTarget),

    /// A whole-LUN passthrough device.
    Lun(DiskTarget),
}

/// Bus attachment options for a storage device.
#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(deny_unknown_fields)]
pub struct DiskTarget {
    /// The bus this device is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<DiskBus>,
}

#[derive(
    Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema,
)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum DiskBus {
    Virtio,
    Sata,
    Scsi,
}

/// A network interface attached to a VM's domain.
///
/// Interfaces carry no name key in this model; boot-order renumbering
/// matches them structurally.
#[derive(
    Clone, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Interface {
    /// The device model presented to the guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<NicModel>,

    /// The interface's MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    /// This device's position in the boot order shared with disks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_order: Option<u32>,
}

#[derive(
    Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq, JsonSchema,
)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum NicModel {
    Virtio,
    E1000,
    Rtl8139,
}
