// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only accessors over VM documents.
//!
//! Each collection has two accessors. The defaulting form substitutes an
//! empty slice when the collection is absent; the `_raw` form passes the
//! stored value through, preserving the absent/empty distinction for callers
//! that need it.

use crate::devices::{Disk, Interface};
use crate::storage::DataVolumeTemplate;
use crate::vm::VirtualMachine;
use crate::volumes::{Volume, VolumeSource};

pub fn disks(vm: &VirtualMachine) -> &[Disk] {
    disks_raw(vm).unwrap_or(&[])
}

pub fn disks_raw(vm: &VirtualMachine) -> Option<&[Disk]> {
    vm.spec.template.spec.domain.devices.disks.as_deref()
}

pub fn interfaces(vm: &VirtualMachine) -> &[Interface] {
    vm.spec.template.spec.domain.devices.interfaces.as_deref().unwrap_or(&[])
}

pub fn volumes(vm: &VirtualMachine) -> &[Volume] {
    volumes_raw(vm).unwrap_or(&[])
}

pub fn volumes_raw(vm: &VirtualMachine) -> Option<&[Volume]> {
    vm.spec.template.spec.volumes.as_deref()
}

pub fn data_volume_templates(vm: &VirtualMachine) -> &[DataVolumeTemplate] {
    data_volume_templates_raw(vm).unwrap_or(&[])
}

pub fn data_volume_templates_raw(
    vm: &VirtualMachine,
) -> Option<&[DataVolumeTemplate]> {
    vm.spec.data_volume_templates.as_deref()
}

/// The name of the data volume backing `volume`, when it has one.
pub fn volume_data_volume_name(volume: &Volume) -> Option<&str> {
    match &volume.source {
        VolumeSource::DataVolume(source) => Some(&source.name),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::devices::{DiskDevice, DiskTarget};
    use crate::volumes::{ContainerDiskVolumeSource, DataVolumeVolumeSource};

    #[test]
    fn absent_collections_default_to_empty() {
        let vm = VirtualMachine::default();
        assert!(disks(&vm).is_empty());
        assert!(volumes(&vm).is_empty());
        assert!(interfaces(&vm).is_empty());
        assert!(data_volume_templates(&vm).is_empty());
    }

    #[test]
    fn raw_accessors_preserve_absence() {
        let mut vm = VirtualMachine::default();
        assert!(disks_raw(&vm).is_none());
        assert!(volumes_raw(&vm).is_none());
        assert!(data_volume_templates_raw(&vm).is_none());

        vm.spec.template.spec.domain.devices.disks = Some(vec![]);
        assert_eq!(disks_raw(&vm), Some(&[] as &[Disk]));
    }

    #[test]
    fn data_volume_name_follows_the_source() {
        let backed = Volume {
            name: "rootdisk".to_string(),
            source: VolumeSource::DataVolume(DataVolumeVolumeSource {
                name: "rootdisk-dv".to_string(),
            }),
        };
        assert_eq!(volume_data_volume_name(&backed), Some("rootdisk-dv"));

        let ephemeral = Volume {
            name: "cloudinit".to_string(),
            source: VolumeSource::ContainerDisk(ContainerDiskVolumeSource {
                image: "registry/disk:latest".to_string(),
            }),
        };
        assert_eq!(volume_data_volume_name(&ephemeral), None);
    }

    #[test]
    fn disk_serializes_with_document_field_names() {
        let disk = Disk {
            name: "rootdisk".to_string(),
            boot_order: Some(1),
            device: DiskDevice::Disk(DiskTarget {
                bus: Some(crate::devices::DiskBus::Virtio),
            }),
        };
        let value = serde_json::to_value(&disk).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "rootdisk",
                "bootOrder": 1,
                "disk": { "bus": "virtio" }
            })
        );
    }
}
