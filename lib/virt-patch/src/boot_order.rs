// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boot-order renumbering for device removal.
//!
//! Disks and network interfaces share one boot-order numbering space: the
//! declared orders form a contiguous sequence starting at 1. Removing a
//! device from the middle of that sequence leaves a gap, so every device
//! ordered after it shifts down by one. The shifter runs once per device
//! collection; the orchestrator invokes it for both collections so the
//! shared space is renumbered as a whole.

use serde::Serialize;
use virt_api_types::devices::{Disk, Interface};

use crate::patch::{PatchBuilder, PatchError, PatchOperation};

/// A device that can participate in the shared boot-order sequence.
pub trait BootDevice: Clone + PartialEq + Serialize {
    fn boot_order(&self) -> Option<u32>;
    fn set_boot_order(&mut self, order: Option<u32>);

    /// The device's name, for kinds keyed by one. Interfaces carry no name
    /// key and are matched structurally instead.
    fn name(&self) -> Option<&str>;
}

impl BootDevice for Disk {
    fn boot_order(&self) -> Option<u32> {
        self.boot_order
    }

    fn set_boot_order(&mut self, order: Option<u32>) {
        self.boot_order = order;
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl BootDevice for Interface {
    fn boot_order(&self) -> Option<u32> {
        self.boot_order
    }

    fn set_boot_order(&mut self, order: Option<u32>) {
        self.boot_order = order;
    }

    fn name(&self) -> Option<&str> {
        None
    }
}

/// Computes the patches that renumber `devices` after the removal of a
/// device with boot order `removed_order`. One update patch is produced per
/// device whose boot order is strictly greater than `removed_order`, each
/// decremented by exactly one; devices at or below the removed order, and
/// devices with no boot order, produce no patch. `removed_name` names the
/// removed device when it belongs to this collection, so it is excluded from
/// the renumbering.
///
/// Patch values are whole lists, so outputs are built over a working copy
/// that drops the removed device (its removal patch precedes these in the
/// batch) and carries earlier decrements forward: applied in order, each
/// patch leaves the list internally consistent and the last one is the fully
/// renumbered list.
pub fn shift_boot_order_patches<D: BootDevice>(
    path: &str,
    devices: &[D],
    removed_name: Option<&str>,
    removed_order: u32,
) -> Result<Vec<PatchOperation>, PatchError> {
    let mut working: Vec<D> = devices
        .iter()
        .filter(|device| {
            removed_name.is_none() || device.name() != removed_name
        })
        .cloned()
        .collect();

    let mut patches = Vec::new();
    for index in 0..working.len() {
        let Some(order) = working[index].boot_order() else {
            continue;
        };
        if order <= removed_order {
            continue;
        }

        let mut shifted = working[index].clone();
        shifted.set_boot_order(Some(order - 1));
        let current = working[index].clone();
        patches.push(
            PatchBuilder::new(path)
                .list_upsert(shifted.clone(), &working, |other| {
                    *other == current
                })
                .build()?,
        );
        working[index] = shifted;
    }

    Ok(patches)
}

#[cfg(test)]
mod test {
    use super::*;
    use virt_api_types::devices::{DiskDevice, DiskTarget};

    fn disk(name: &str, boot_order: Option<u32>) -> Disk {
        Disk {
            name: name.to_string(),
            boot_order,
            device: DiskDevice::Disk(DiskTarget::default()),
        }
    }

    fn nic(boot_order: Option<u32>) -> Interface {
        Interface { boot_order, ..Default::default() }
    }

    fn decode(patch: &PatchOperation) -> Vec<Disk> {
        serde_json::from_value(patch.value.clone()).unwrap()
    }

    #[test]
    fn devices_at_or_below_the_removed_order_are_untouched() {
        let disks = [disk("a", Some(1)), disk("b", Some(2)), disk("c", None)];
        let patches =
            shift_boot_order_patches("/d", &disks, Some("b"), 2).unwrap();
        assert!(patches.is_empty());
    }

    #[test]
    fn each_later_device_is_decremented_once() {
        let disks = [
            disk("a", Some(1)),
            disk("b", Some(2)),
            disk("c", Some(3)),
            disk("d", Some(4)),
        ];
        let patches =
            shift_boot_order_patches("/d", &disks, Some("b"), 2).unwrap();
        assert_eq!(patches.len(), 2);

        // The removed device never reappears, and each successive value
        // carries the earlier decrements forward.
        let first = decode(&patches[0]);
        assert_eq!(
            first,
            vec![disk("a", Some(1)), disk("c", Some(2)), disk("d", Some(4))]
        );
        let last = decode(&patches[1]);
        assert_eq!(
            last,
            vec![disk("a", Some(1)), disk("c", Some(2)), disk("d", Some(3))]
        );
    }

    #[test]
    fn unnamed_devices_shift_without_a_removed_name() {
        let nics = [nic(Some(1)), nic(Some(3)), nic(None)];
        let patches =
            shift_boot_order_patches("/i", &nics, None, 2).unwrap();
        assert_eq!(patches.len(), 1);

        let value: Vec<Interface> =
            serde_json::from_value(patches[0].value.clone()).unwrap();
        assert_eq!(value, vec![nic(Some(1)), nic(Some(2)), nic(None)]);
    }
}
