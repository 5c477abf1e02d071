// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Session and configuration factories (fixtures)
//! - Temporary data directory management with auto-cleanup


#[allow(unused_imports)]
pub use fixtures::{descriptions, open_session, run_lines, test_config};
pub use temp_dir::setup_temp_dirs;
