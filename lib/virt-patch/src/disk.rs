// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Patch generation for user-initiated disk changes.
//!
//! The two entry points cover the editor's disk operations: removing a disk
//! (with its paired volume, any backing data volume template, and the
//! boot-order renumbering the removal forces) and adding or editing one.

use virt_api_types::devices::Disk;
use virt_api_types::selectors;
use virt_api_types::storage::{DataVolume, DataVolumeTemplate};
use virt_api_types::vm::VmLikeEntity;
use virt_api_types::volumes::Volume;

use crate::boot_order::shift_boot_order_patches;
use crate::patch::{PatchBuilder, PatchError, PatchOperation};
use crate::vm_like::vm_like_patches;

pub const DISKS_PATH: &str = "/spec/template/spec/domain/devices/disks";
pub const INTERFACES_PATH: &str =
    "/spec/template/spec/domain/devices/interfaces";
pub const VOLUMES_PATH: &str = "/spec/template/spec/volumes";
pub const DATA_VOLUME_TEMPLATES_PATH: &str = "/spec/dataVolumeTemplates";

/// Describes one disk edit: the new disk and volume, the data volume backing
/// the new volume (if any), and the names of whatever is being replaced.
/// The old names are independently optional; a freshly added disk has no old
/// counterpart, so its upserts append instead of replacing.
#[derive(Clone, Debug)]
pub struct DiskChange {
    pub disk: Disk,
    pub volume: Volume,
    pub data_volume: Option<DataVolume>,
    pub old_disk_name: Option<String>,
    pub old_volume_name: Option<String>,
    pub old_data_volume_name: Option<String>,
}

/// Computes the patch list that removes `disk` from `entity`.
///
/// The disk is spliced out of the disk list and its volume, paired by shared
/// name, out of the volume list; when that volume is backed by a data
/// volume, the template with the data volume's name is spliced out of the
/// template list in the same batch. If the removed disk carried a boot
/// order, renumbering patches for the disk collection and then the
/// interface collection follow the removals, keeping the shared boot-order
/// sequence contiguous.
pub fn remove_disk_patches(
    entity: &VmLikeEntity,
    disk: &Disk,
) -> Result<Vec<PatchOperation>, PatchError> {
    vm_like_patches(entity, |vm| {
        let disk_name = disk.name.as_str();
        let disks = selectors::disks(vm);
        let volumes = selectors::volumes(vm);
        let volume = volumes.iter().find(|v| v.name == disk_name);

        let mut patches = vec![
            PatchBuilder::new(DISKS_PATH)
                .list_remove(disks, |other| other.name == disk_name)
                .build()?,
            PatchBuilder::new(VOLUMES_PATH)
                .list_remove(volumes, |other| {
                    volume.is_some_and(|v| other.name == v.name)
                })
                .build()?,
        ];

        if let Some(data_volume_name) =
            volume.and_then(selectors::volume_data_volume_name)
        {
            patches.push(
                PatchBuilder::new(DATA_VOLUME_TEMPLATES_PATH)
                    .list_remove(
                        selectors::data_volume_templates(vm),
                        |other| other.metadata.name == data_volume_name,
                    )
                    .build()?,
            );
        }

        if let Some(removed_order) = disk.boot_order {
            patches.extend(shift_boot_order_patches(
                DISKS_PATH,
                disks,
                Some(disk_name),
                removed_order,
            )?);
            patches.extend(shift_boot_order_patches(
                INTERFACES_PATH,
                selectors::interfaces(vm),
                None,
                removed_order,
            )?);
        }

        Ok(patches)
    })
}

/// Computes the patch list that adds or edits a disk on `entity`.
///
/// Emits an upsert for the disk list and one for the volume list, each
/// matching by the corresponding old name; an absent old name matches
/// nothing, so the new element is appended. A template upsert follows only
/// when the change supplies a data volume, using its embeddable template
/// form.
pub fn update_disk_patches(
    entity: &VmLikeEntity,
    change: &DiskChange,
) -> Result<Vec<PatchOperation>, PatchError> {
    vm_like_patches(entity, |vm| {
        // The raw accessors deliberately skip the empty-list default: an
        // absent collection upserts into a fresh single-element list.
        let disks = selectors::disks_raw(vm).unwrap_or(&[]);
        let volumes = selectors::volumes_raw(vm).unwrap_or(&[]);
        let templates =
            selectors::data_volume_templates_raw(vm).unwrap_or(&[]);

        let mut patches = vec![
            PatchBuilder::new(DISKS_PATH)
                .list_upsert(change.disk.clone(), disks, |other| {
                    change.old_disk_name.as_deref()
                        == Some(other.name.as_str())
                })
                .build()?,
            PatchBuilder::new(VOLUMES_PATH)
                .list_upsert(change.volume.clone(), volumes, |other| {
                    change.old_volume_name.as_deref()
                        == Some(other.name.as_str())
                })
                .build()?,
        ];

        if let Some(data_volume) = &change.data_volume {
            patches.push(
                PatchBuilder::new(DATA_VOLUME_TEMPLATES_PATH)
                    .list_upsert(
                        DataVolumeTemplate::from(data_volume),
                        templates,
                        |other| {
                            change.old_data_volume_name.as_deref()
                                == Some(other.metadata.name.as_str())
                        },
                    )
                    .build()?,
            );
        }

        Ok(patches)
    })
}
