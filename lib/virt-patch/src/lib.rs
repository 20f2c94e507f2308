// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Patch generation for VM-like configuration documents.
//!
//! Given a snapshot of a VM document and a description of a disk change,
//! these routines deterministically produce the ordered list of patch
//! operations that realizes the change: removing or upserting the disk, its
//! paired volume, and any associated data volume template, and renumbering
//! the shared disk/interface boot order so it stays contiguous. The caller
//! submits the list to the remote object store; nothing here performs I/O or
//! mutates the snapshot.

pub mod boot_order;
pub mod disk;
pub mod patch;
pub mod vm_like;

pub use disk::{remove_disk_patches, update_disk_patches, DiskChange};
pub use patch::{PatchBuilder, PatchError, PatchOperation};
