// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: templates, placed objects and the scene that owns them.

pub mod object;
pub mod scene;
pub mod template;
