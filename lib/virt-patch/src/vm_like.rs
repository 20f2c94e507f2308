// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolution of VM-like entities into concrete patch targets.

use virt_api_types::vm::{VirtualMachine, VmLikeEntity};

use crate::patch::{PatchError, PatchOperation};

/// Applies `build` to every concrete VM document described by `entity` and
/// concatenates the results in document order. A plain VM is patched
/// directly. A template's VMs live under its `/objects` list, so each patch
/// emitted for the template's `index`th VM is rebased onto
/// `/objects/<index>`.
pub fn vm_like_patches<F>(
    entity: &VmLikeEntity,
    mut build: F,
) -> Result<Vec<PatchOperation>, PatchError>
where
    F: FnMut(&VirtualMachine) -> Result<Vec<PatchOperation>, PatchError>,
{
    match entity {
        VmLikeEntity::VirtualMachine(vm) => build(vm),
        VmLikeEntity::Template(template) => {
            let mut patches = Vec::new();
            for (index, vm) in template.objects.iter().enumerate() {
                for patch in build(vm)? {
                    patches.push(PatchOperation {
                        path: format!("/objects/{}{}", index, patch.path),
                        value: patch.value,
                    });
                }
            }
            Ok(patches)
        }
    }
}
