// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.1.0
//
// This file is the module declaration for utility functions shared across the
// miner: display formatting and logger setup.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, logging

pub mod format;
pub mod logging;

// Changelog:
// - v1.1.0 (2026-09-28): Utils module for the Helios node.
//   - Declares format and logging.
