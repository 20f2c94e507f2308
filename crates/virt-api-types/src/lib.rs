// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The typed document model for VM-like configuration objects.
//!
//! A VM-like entity is either a single virtual machine document or a template
//! that wraps zero or more of them. The structs here mirror the document's
//! wire shape exactly (camelCase field names, optional collections kept as
//! `Option<Vec<_>>` so an absent list stays distinguishable from an empty
//! one), because patch paths such as
//! `/spec/template/spec/domain/devices/disks` are derived from it.

pub mod devices;
pub mod selectors;
pub mod storage;
pub mod vm;
pub mod volumes;
