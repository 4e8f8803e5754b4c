use std::{
    ffi::OsStr,
    io::Write,
    process::{Command, Stdio},
};

use eyre::{bail, eyre, WrapErr};
use tracing::debug;

/// Pipes `source` through rustfmt and returns the formatted code.
///
/// If rustfmt can't be spawned or rejects the code, this fails and nothing
/// gets written.
pub(crate) fn format(rustfmt: &OsStr, source: &str) -> eyre::Result<String> {
    let mut cmd = Command::new(rustfmt);
    cmd.args(["--edition", "2021"]);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    let final_cmd = format!("{cmd:?}");
    debug!("Running {final_cmd}");

    let mut child = cmd
        .spawn()
        .wrap_err_with(|| format!("while spawning command: {final_cmd}"))?;

    // Feed stdin from another thread so a full stdout pipe can't deadlock us.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| eyre!("stdin of {final_cmd} was not captured"))?;
    let input = source.to_owned();
    let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

    let output = child
        .wait_with_output()
        .wrap_err_with(|| format!("while waiting for command: {final_cmd}"))?;
    let written = writer
        .join()
        .map_err(|_| eyre!("thread feeding {final_cmd} panicked"))?;

    // status first: if rustfmt bailed early, the broken pipe is only a symptom
    if !output.status.success() {
        bail!(
            "command returned status {:?}, command was: {final_cmd}\n=== stderr\n{}===",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    written.wrap_err_with(|| format!("while writing to stdin of {final_cmd}"))?;

    String::from_utf8(output.stdout)
        .wrap_err_with(|| format!("{final_cmd} produced non-UTF-8 output"))
}
