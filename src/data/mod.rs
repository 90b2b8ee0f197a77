// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Market data that can be retrieved without logging in.

/// Company fundamentals.
pub mod fundamentals;
/// Definitions surrounding tradable instruments.
pub mod instruments;
/// Real-time quotes.
pub mod quotes;
