use std::{ffi::OsString, path::PathBuf};

/// Where the generated module lives, relative to the top-level of the
/// workspace.
pub(crate) const DEFAULT_OUT_PATH: &str = "crates/loona-hpack-static/src/generated.rs";

pub(crate) const USAGE: &str = "\
Usage: hpack-static-gen [OPTIONS]

Options:
  --out <PATH>       File to generate [default: crates/loona-hpack-static/src/generated.rs]
  --check            Don't write anything, fail if the file is out of date
  --rustfmt <PATH>   rustfmt binary used to normalize the output [default: rustfmt]
  --no-fmt           Skip the rustfmt pass
  -h, --help         Print this message";

#[derive(Debug, PartialEq)]
pub(crate) struct Args {
    pub(crate) out: PathBuf,
    pub(crate) check: bool,
    /// `None` when the rustfmt pass is disabled.
    pub(crate) rustfmt: Option<OsString>,
    pub(crate) help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_PATH),
            check: false,
            rustfmt: Some(OsString::from("rustfmt")),
            help: false,
        }
    }
}

impl Args {
    pub(crate) fn from_env() -> Result<Self, lexopt::Error> {
        Self::parse(lexopt::Parser::from_env())
    }

    fn parse(mut parser: lexopt::Parser) -> Result<Self, lexopt::Error> {
        use lexopt::prelude::*;

        let mut args = Args::default();
        let mut no_fmt = false;

        while let Some(arg) = parser.next()? {
            match arg {
                Long("out") => args.out = parser.value()?.into(),
                Long("check") => args.check = true,
                Long("rustfmt") => args.rustfmt = Some(parser.value()?),
                Long("no-fmt") => no_fmt = true,
                Short('h') | Long("help") => args.help = true,
                _ => return Err(arg.unexpected()),
            }
        }

        if no_fmt {
            args.rustfmt = None;
        }
        Ok(args)
    }
}
