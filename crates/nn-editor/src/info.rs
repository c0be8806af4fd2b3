//! Name, version, and the help/about/debug text.

use std::env::consts;

pub const NAME: &str = "NightNote";
pub const VERSION: &str = "25.0708.1";
pub const AUTHOR: &str = "DONGFANG Lingye";
pub const EMAIL: &str = "ly@lingye.online";

/// Environment variable naming an optional TOML file with [`Limits`](crate::config::Limits).
pub const CONFIG_ENV: &str = "NIGHTNOTE_CONFIG";

/// `NightNote version 25.0708.1 by ... <...>`
#[must_use]
pub fn signature() -> String {
    format!("{NAME} version {VERSION} by {AUTHOR} <{EMAIL}>")
}

/// The command list printed by `h`.
pub const COMMANDS: &str = "\
Command list:
p               Print all lines
i [n]           Insert after line n (end with '.')
a               Append at end (end with '.')
d [n]           Delete line n
w [filename]    Write buffer to file
o [filename]    Open file and load to buffer
f [pattern]     Find lines matching pattern (regex)
x [pat] [rep]   Replace pattern with rep on every line (regex)
u l             List buffers
u c             Clear buffer
u s [n]         Switch buffer (0~N)
u r [n]         Remove buffer n
q               Quit
h               Show this help
b               Debug info
v               Show about info";

/// Lines printed by `v`.
#[must_use]
pub fn about() -> Vec<String> {
    vec![
        signature(),
        "A simple line editor, similar to Linux's ed editor.".to_string(),
        "Type 'h' for help.".to_string(),
        "Type 'q' to quit.".to_string(),
        format!("Set {CONFIG_ENV} to a TOML file to change buffer limits."),
    ]
}

/// Lines printed by `b`, before the size summary.
#[must_use]
pub fn debug() -> Vec<String> {
    vec![
        "DEBUG INFO".to_string(),
        VERSION.to_string(),
        format!("OS: {} ({})", consts::OS, consts::ARCH),
    ]
}
