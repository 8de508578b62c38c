// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Direct manipulation of placed objects.

pub mod drag;
