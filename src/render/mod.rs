// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Visual projection of the scene.
//!
//! The scene model is the source of truth; everything here can be rebuilt
//! from it at any time.

pub mod surface;
pub mod sync;
