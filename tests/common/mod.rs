// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::process::Command;

use assert_cmd::cargo;

#[inline]
pub fn hello_world() -> Command {
    Command::new(cargo::cargo_bin!("hello-world"))
}
