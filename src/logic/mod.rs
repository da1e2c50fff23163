// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Side-effectful business logic executed off the UI thread.

pub mod store;
