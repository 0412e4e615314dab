// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-suggester-cli
// ABOUTME: One module per subcommand: suggest, macros, detect and score

pub mod detect;
pub mod macros;
pub mod score;
pub mod suggest;
