//! Shell completion generation for commands using these flag values.
//!
//! Enum domains registered through [`string_enum_flag`] and
//! [`string_slice_enum_flag`] reach the generated script as literal
//! candidates; the shell filters them against whatever the user has typed.
//!
//! [`string_enum_flag`]: crate::enums::string_enum_flag
//! [`string_slice_enum_flag`]: crate::enums::string_slice_enum_flag

use std::io::Write;

use clap::Command;
use clap_complete::Shell;

/// Write a completion script for `cmd` to `out`.
pub fn generate(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, out);
}
