// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for templates, scenes, scripts and image assets.

pub mod assets;
pub mod media;
pub mod script;
pub mod serialization;
pub mod templates;
