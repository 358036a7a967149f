#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `md5-digest`
//! binary. It recognises a single MESSAGE operand, repeatable `--file`
//! operands, and the `--quiet`, `--verbose`, `--help` and `--version`
//! switches, then delegates hashing to [`md5_core`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the only entry point. The function accepts an
//! iterator of arguments together with handles for standard output and error,
//! so tests drive it with in-memory buffers. A [`clap`](https://docs.rs/clap/)
//! command definition performs the parse; help and version output are
//! rendered from static text so the wording stays stable.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Standard output carries only help, version, or digest lines. Diagnostics
//!   and log events go to standard error.
//! - A message is hashed as UTF-8 text and must be non-empty; files are
//!   hashed as raw bytes and may be empty.
//!
//! # Errors
//!
//! Argument errors and rejected messages exit with [`EXIT_INVALID_INPUT`].
//! Unreadable files and failed writes exit with [`EXIT_IO`]; the remaining
//! files are still hashed.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["md5-digest", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "MD5 hash of \"abc\": 900150983cd24fb0d6963f7d28e17f72\n"
//! );
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};
use logging::{VerbosityConfig, init_tracing};
use md5_core::{Digest, compute_digest_utf8};
use tracing::{debug, info};

/// Program name used in diagnostics.
const PROGRAM_NAME: &str = "md5-digest";

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for argument errors and rejected messages.
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Exit code for unreadable files and failed writes.
pub const EXIT_IO: i32 = 2;

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "md5-digest\n",
    "\n",
    "Usage: md5-digest [-q] [-v...] MESSAGE\n",
    "       md5-digest [-q] [-v...] -f FILE [-f FILE]...\n",
    "\n",
    "Prints the RFC 1321 MD5 digest of MESSAGE (encoded as UTF-8) or of the\n",
    "contents of each FILE. MD5 is not collision resistant; do not rely on it\n",
    "for security.\n",
    "\n",
    "Options:\n",
    "  -f, --file FILE  Hash the contents of FILE (may be repeated).\n",
    "  -q, --quiet      Print only the hex digest.\n",
    "  -v, --verbose    Increase log verbosity on standard error.\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "\n",
    "The MD5_DIGEST_LOG environment variable overrides the log filter.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    quiet: bool,
    verbose: u8,
    files: Vec<PathBuf>,
    message: Option<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Print only the hex digest.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity on standard error.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Hash the contents of FILE.")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Text to hash.")
                .value_parser(OsStringValueParser::new())
                .num_args(1)
                .action(ArgAction::Set),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        quiet: matches.get_flag("quiet"),
        verbose: matches.get_count("verbose"),
        files: matches
            .remove_many::<PathBuf>("file")
            .map(Iterator::collect)
            .unwrap_or_default(),
        message: matches.remove_one::<OsString>("message"),
    })
}

/// Runs the command-line interface and returns the process exit code.
///
/// `arguments` includes the program name as its first element, matching
/// [`std::env::args_os`].
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            // clap renders a multi-line report; keep only its summary line.
            let rendered = error.to_string();
            let summary = rendered.lines().next().unwrap_or_default();
            let summary = summary.strip_prefix("error: ").unwrap_or(summary);
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {summary}");
            let _ = write!(stderr, "{}", usage_lines());
            EXIT_INVALID_INPUT
        }
    }
}

fn usage_lines() -> &'static str {
    let start = HELP_TEXT.find("Usage:").unwrap_or(0);
    let end = HELP_TEXT[start..]
        .find("\n\n")
        .map_or(HELP_TEXT.len(), |offset| start + offset + 1);
    &HELP_TEXT[start..end]
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        quiet,
        verbose,
        files,
        message,
    } = parsed;

    if show_help {
        return write_or_io_error(stdout.write_all(HELP_TEXT.as_bytes()), stderr);
    }

    if show_version {
        let banner = format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"));
        return write_or_io_error(stdout.write_all(banner.as_bytes()), stderr);
    }

    init_tracing(VerbosityConfig::from_verbose_level(verbose));
    debug!(
        target: "md5::cli",
        quiet,
        files = files.len(),
        has_message = message.is_some(),
        "arguments parsed"
    );

    if message.is_none() && files.is_empty() {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: missing MESSAGE or --file operand");
        let _ = write!(stderr, "{}", usage_lines());
        return EXIT_INVALID_INPUT;
    }

    let mut exit_code = EXIT_SUCCESS;

    if let Some(message) = message {
        let text = message.to_string_lossy().into_owned();
        match compute_digest_utf8(message.as_encoded_bytes()) {
            Ok(hex) => {
                let line = if quiet {
                    format!("{hex}\n")
                } else {
                    format!("MD5 hash of \"{text}\": {hex}\n")
                };
                let written = stdout.write_all(line.as_bytes());
                exit_code = exit_code.max(write_or_io_error(written, stderr));
            }
            Err(error) => {
                let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
                exit_code = exit_code.max(EXIT_INVALID_INPUT);
            }
        }
    }

    if !files.is_empty() {
        info!(target: "md5::cli", count = files.len(), "hashing files");
        for (path, result) in files.iter().zip(digest_paths(&files)) {
            match result {
                Ok(digest) => {
                    let line = if quiet {
                        format!("{digest}\n")
                    } else {
                        format!("{digest}  {}\n", path.display())
                    };
                    let written = stdout.write_all(line.as_bytes());
                    exit_code = exit_code.max(write_or_io_error(written, stderr));
                }
                Err(error) => {
                    let _ = writeln!(stderr, "{PROGRAM_NAME}: {}: {error}", path.display());
                    exit_code = exit_code.max(EXIT_IO);
                }
            }
        }
    }

    exit_code
}

fn write_or_io_error<Err: Write>(result: io::Result<()>, stderr: &mut Err) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write output: {error}");
            EXIT_IO
        }
    }
}

#[cfg(feature = "parallel")]
fn digest_paths(paths: &[PathBuf]) -> Vec<io::Result<Digest>> {
    md5_core::digest_files(paths)
}

#[cfg(not(feature = "parallel"))]
fn digest_paths(paths: &[PathBuf]) -> Vec<io::Result<Digest>> {
    paths
        .iter()
        .map(|path| {
            let file = std::fs::File::open(path)?;
            md5_core::digest_reader(io::BufReader::new(file))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(args.iter().copied(), &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("stdout is UTF-8"),
            String::from_utf8(stderr).expect("stderr is UTF-8"),
        )
    }

    #[test]
    fn parse_args_recognises_flags() {
        let parsed = parse_args(["md5-digest", "-q", "-vv", "-f", "a", "--file", "b", "msg"])
            .expect("parse succeeds");
        assert!(parsed.quiet);
        assert_eq!(parsed.verbose, 2);
        assert_eq!(parsed.files, [PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(parsed.message, Some(OsString::from("msg")));
    }

    #[test]
    fn parse_args_without_program_name_defaults() {
        let parsed = parse_args(Vec::<OsString>::new()).expect("parse succeeds");
        assert!(parsed.message.is_none());
        assert!(parsed.files.is_empty());
    }

    #[test]
    fn parse_args_rejects_second_message() {
        assert!(parse_args(["md5-digest", "one", "two"]).is_err());
    }

    #[test]
    fn message_prints_labelled_digest() {
        let (code, stdout, stderr) = run_captured(&["md5-digest", "Hello, World!"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            stdout,
            "MD5 hash of \"Hello, World!\": 65a8e27d8879283831b664bd8b7f0ad4\n"
        );
        assert!(stderr.is_empty());
    }

    #[test]
    fn quiet_prints_bare_digest() {
        let (code, stdout, _) = run_captured(&["md5-digest", "--quiet", "message digest"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(stdout, "f96b697d7cb7938d525a2f31aaf161d0\n");
    }

    #[test]
    fn empty_message_is_rejected() {
        let (code, stdout, stderr) = run_captured(&["md5-digest", ""]);
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(stdout.is_empty());
        assert_eq!(
            stderr,
            "md5-digest: invalid input: message must be a non-empty string\n"
        );
    }

    #[test]
    fn missing_operand_shows_usage() {
        let (code, stdout, stderr) = run_captured(&["md5-digest"]);
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(stdout.is_empty());
        assert!(stderr.contains("missing MESSAGE"));
        assert!(stderr.contains("Usage:"));
    }

    #[test]
    fn unknown_flag_is_an_argument_error() {
        let (code, stdout, stderr) = run_captured(&["md5-digest", "--definitely-not-a-flag"]);
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("md5-digest: "));
        assert!(stderr.contains("Usage:"));
    }

    #[test]
    fn help_and_version_write_to_stdout() {
        let (code, stdout, stderr) = run_captured(&["md5-digest", "--help"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(stdout, HELP_TEXT);
        assert!(stderr.is_empty());

        let (code, stdout, _) = run_captured(&["md5-digest", "-V"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(stdout, format!("md5-digest {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn usage_lines_cover_both_forms() {
        let usage = usage_lines();
        assert!(usage.starts_with("Usage: md5-digest"));
        assert!(usage.contains("-f FILE"));
        assert!(usage.ends_with('\n'));
        assert!(!usage.contains("Options:"));
    }

    #[test]
    fn files_print_digest_and_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let abc = dir.path().join("abc.txt");
        let empty = dir.path().join("empty.txt");
        std::fs::write(&abc, b"abc").expect("write abc");
        std::fs::write(&empty, b"").expect("write empty");

        let abc_arg = abc.to_str().expect("utf-8 path");
        let empty_arg = empty.to_str().expect("utf-8 path");
        let (code, stdout, stderr) =
            run_captured(&["md5-digest", "-f", abc_arg, "-f", empty_arg]);

        assert_eq!(code, EXIT_SUCCESS);
        assert!(stderr.is_empty());
        assert_eq!(
            stdout,
            format!(
                "900150983cd24fb0d6963f7d28e17f72  {abc_arg}\nd41d8cd98f00b204e9800998ecf8427e  {empty_arg}\n"
            )
        );
    }

    #[test]
    fn unreadable_file_reports_and_continues() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing");
        let present = dir.path().join("present");
        std::fs::write(&present, b"a").expect("write present");

        let missing_arg = missing.to_str().expect("utf-8 path");
        let present_arg = present.to_str().expect("utf-8 path");
        let (code, stdout, stderr) =
            run_captured(&["md5-digest", "-q", "-f", missing_arg, "-f", present_arg]);

        assert_eq!(code, EXIT_IO);
        assert_eq!(stdout, "0cc175b9c0f1b6a831c399e269772661\n");
        assert!(stderr.starts_with(&format!("md5-digest: {missing_arg}: ")));
    }

    #[test]
    fn message_and_files_combine() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data");
        std::fs::write(&path, b"abc").expect("write data");
        let path_arg = path.to_str().expect("utf-8 path");

        let (code, stdout, _) = run_captured(&["md5-digest", "-q", "a", "-f", path_arg]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            stdout,
            "0cc175b9c0f1b6a831c399e269772661\n900150983cd24fb0d6963f7d28e17f72\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_message_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let args = [
            OsString::from("md5-digest"),
            OsString::from_vec(vec![b'a', 0xff]),
        ];
        let code = run(args, &mut stdout, &mut stderr);
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(stdout.is_empty());
        assert!(String::from_utf8_lossy(&stderr).contains("not valid UTF-8"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_stdout_write_is_an_io_error() {
        let mut stderr = Vec::new();
        let code = run(["md5-digest", "abc"], &mut BrokenPipe, &mut stderr);
        assert_eq!(code, EXIT_IO);
        assert!(String::from_utf8_lossy(&stderr).contains("failed to write output"));
    }
}
