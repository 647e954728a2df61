use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::auth::Plaintext;

const FALLBACK_PROGRAM: &str = "generate-n8n-hash";

/// What the process was asked to do, read straight from argv.
///
/// Only the first argument after the program name matters and there are no
/// flags: `-h`, `--` and the like are passwords like any other. Extra
/// arguments are ignored.
#[derive(Debug)]
pub struct Invocation {
    pub program: String,
    pub password: Option<Plaintext>,
}

impl Invocation {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = program_name(args.next().as_deref());
        // Invalid UTF-8 is replaced with U+FFFD, the same as Node's process.argv
        let password =
            Plaintext::from_arg(args.next().map(|a| a.to_string_lossy().into_owned()));

        Invocation { program, password }
    }
}

/// File name of `argv[0]`, or the binary name when it is missing.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|p| Path::new(p).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROGRAM.to_string())
}
