//! Generates `loona-hpack-static/src/generated.rs` out of the RFC 7541 static
//! table. Run it from the top-level of the workspace.

use std::{fs, io};

use eyre::{bail, WrapErr};
use loona_hpack_static::{export, Table};
use tracing::{info, Level};
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod output;
mod rfc7541;
mod rustfmt;

use args::{Args, USAGE};

fn main() -> eyre::Result<()> {
    setup_tracing_and_error_reporting()?;

    let args = Args::from_env()?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    run(&args)
}

fn run(args: &Args) -> eyre::Result<()> {
    let out_path = &args.out;
    if fs::symlink_metadata(out_path).is_err() {
        bail!(
            "⛔️ Output path doesn't exist: {}\n\
             This tool expects to overwrite it, so the fact that it doesn't already exist\n\
             means you're probably running it from the wrong directory.\n\
             👉 This tool should only be run from the top-level of the loona workspace.",
            out_path.display()
        );
    }

    info!("🧱 Building static table");
    let source = render_static_table()?;

    let source = match &args.rustfmt {
        Some(bin) => {
            info!("🧹 Normalizing with rustfmt");
            rustfmt::format(bin, &source)?
        }
        None => source,
    };

    let old_source = match fs::read_to_string(out_path) {
        Ok(old_source) => old_source,
        // not UTF-8, so certainly not what we'd generate
        Err(err) if err.kind() == io::ErrorKind::InvalidData => String::new(),
        Err(err) => {
            return Err(err).wrap_err_with(|| format!("while reading {}", out_path.display()))
        }
    };
    if old_source == source {
        info!("📦 {} is up-to-date", out_path.display());
        return Ok(());
    }

    if args.check {
        bail!(
            "{} is out of date, run hpack-static-gen to regenerate it",
            out_path.display()
        );
    }

    output::write_atomically(out_path, source.as_bytes())?;
    info!("✨ {} updated!", out_path.display());
    Ok(())
}

/// Builds the static table from the RFC 7541 entries and renders it.
fn render_static_table() -> eyre::Result<String> {
    let table =
        Table::build(&rfc7541::ENTRIES).wrap_err("RFC 7541 static table entries are malformed")?;
    let source = export::render(&table)?;
    Ok(source)
}

fn setup_tracing_and_error_reporting() -> eyre::Result<()> {
    color_eyre::install()?;

    let targets = if let Ok(rust_log) = std::env::var("RUST_LOG") {
        rust_log
            .parse::<Targets>()
            .wrap_err_with(|| format!("invalid RUST_LOG: {rust_log}"))?
    } else {
        Targets::new()
            .with_default(Level::INFO)
            .with_target("hpack_static_gen", Level::DEBUG)
            .with_target("loona_hpack_static", Level::DEBUG)
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_file(false)
        .with_line_number(false)
        .without_time();

    tracing_subscriber::registry()
        .with(targets)
        .with(fmt_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, fs, path::PathBuf};

    use loona_hpack_static::{generated, HeaderLookup, Table};
    use pretty_assertions::assert_eq;

    use super::{render_static_table, rfc7541, run, Args};

    /// A fresh, empty directory for one test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hpack-static-gen-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes a stale `generated.rs` into `dir` and returns its path.
    fn stale_output(dir: &std::path::Path) -> PathBuf {
        let out = dir.join("generated.rs");
        fs::write(&out, "// stale\n").unwrap();
        out
    }

    #[test]
    fn test_run_regenerates_stale_file() {
        let dir = scratch_dir("regenerate");
        let out = stale_output(&dir);

        run(&Args {
            out: out.clone(),
            rustfmt: None,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), render_static_table().unwrap());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failing_rustfmt_writes_nothing() {
        let dir = scratch_dir("badfmt");
        let out = stale_output(&dir);

        let res = run(&Args {
            out: out.clone(),
            rustfmt: Some(OsString::from("false")),
            ..Default::default()
        });

        assert!(res.is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "// stale\n");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_check_fails_on_stale_file() {
        let dir = scratch_dir("check-stale");
        let out = stale_output(&dir);

        let err = run(&Args {
            out: out.clone(),
            check: true,
            rustfmt: None,
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("is out of date"), "{err}");
        assert_eq!(fs::read_to_string(&out).unwrap(), "// stale\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_check_passes_on_fresh_file() {
        let dir = scratch_dir("check-fresh");
        let out = dir.join("generated.rs");
        fs::write(&out, render_static_table().unwrap()).unwrap();

        run(&Args {
            out,
            check: true,
            rustfmt: None,
            ..Default::default()
        })
        .unwrap();
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_non_utf8_file_is_stale() {
        let dir = scratch_dir("non-utf8");
        let out = dir.join("generated.rs");
        fs::write(&out, b"\xff\xfe\x00").unwrap();

        let err = run(&Args {
            out,
            check: true,
            rustfmt: None,
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("is out of date"), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_surfaces_read_errors() {
        let dir = scratch_dir("unreadable");
        // exists, but can't be read as a file
        let out = dir.join("generated.rs");
        fs::create_dir(&out).unwrap();

        let err = run(&Args {
            out,
            check: true,
            rustfmt: None,
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("while reading"), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_links_library_without_generated_table() {
        // the generator must still build when `generated.rs` is broken
        let manifest = include_str!("../Cargo.toml");
        let (deps, dev_deps) = manifest.split_once("[dev-dependencies]").unwrap();
        let dep = deps
            .lines()
            .find(|line| line.starts_with("loona-hpack-static"))
            .unwrap();
        assert!(dep.contains("default-features = false"), "{dep}");
        assert!(dev_deps.contains("\"embedded\""));
    }

    #[test]
    fn test_generated_module_is_up_to_date() {
        let committed = include_str!("../../loona-hpack-static/src/generated.rs");
        assert_eq!(
            render_static_table().unwrap(),
            committed,
            "generated.rs is stale, run `cargo run -p hpack-static-gen`"
        );
    }

    #[test]
    fn test_rfc_entries_match_generated_entries() {
        assert_eq!(rfc7541::ENTRIES, generated::ENTRIES);
    }

    #[test]
    fn test_rfc_table_scenarios() {
        let table = Table::build(&rfc7541::ENTRIES).unwrap();

        let first = table.by_index(1).unwrap();
        assert_eq!((first.name, first.value, first.sensitive), (":authority", "", false));
        assert_eq!(table.by_name_value(":method", "GET"), Some(2));
        assert_eq!(table.by_name_value(":method", "POST"), Some(3));
        assert_eq!(table.by_name(":method"), Some(2));
        assert_eq!(table.by_name_value(":status", "304"), Some(11));
        assert_eq!(table.by_name("nonexistent-header"), None);
        assert!(table.by_index(0).is_err());
        assert!(table.by_index(62).is_err());
    }
}
