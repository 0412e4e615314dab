// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for recipe-suggester-cli
// ABOUTME: Provides JSON output formatting shared by commands

pub mod display;
