//! # txkv
//! A small in-memory key-value store keyed by integer ids, with a single
//! non-nested transaction providing atomic commit and rollback.
//!
//! ## Features
//! - `get` / `set` / `delete_by_id` / `delete_by_value` that read through
//!   an active transaction transparently
//! - `begin` / `commit` / `rollback` with explicit lifecycle errors
//! - Generic [`Set`] used to track pending deletions
//! - Line-oriented command loop used by the `txkv` binary
//!
//! ## Usage
//! ```
//! use txkv::Database;
//!
//! let mut db = Database::new("demo");
//! db.set(1, "foo");
//! db.begin().unwrap();
//! db.delete_by_id(1);
//! assert_eq!(db.get(1), None);
//! db.rollback().unwrap();
//! assert_eq!(db.get(1), Some("foo"));
//! ```
// =====================================================================
// File: lib.rs
//
//   Besides the library modules, this file implements the command loop
//   that accepts the following commands:
//
//     `GET <id>`            -> Retrieve the value for an id: value or NULL
//     `SET <id> <value>`    -> Store a value (remaining words joined by one space)
//     `DEL <id>`            -> Delete an id
//     `DELVAL <value>`      -> Delete every id currently holding value
//     `BEGIN`               -> Start a transaction (no nesting)
//     `COMMIT`              -> Apply the active transaction
//     `ROLLBACK` / `ABORT`  -> Discard the active transaction
//     `EXIT` / `QUIT`       -> Terminate the loop
// =====================================================================
pub mod error;
pub use error::{DbError, DbResult};

pub mod set;
pub use set::Set;

pub mod transaction;
pub use transaction::{CommitStats, Transaction};

pub mod database;
pub use database::Database;

use std::io::{self, BufRead, Write};

/// Integer key type used by the database.
pub type Id = i64;

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}

const PROPER_SYNTAX: &str =
    "Syntax Usage: GET <id>, SET <id> <value>, DEL <id>, DELVAL <value>, BEGIN, COMMIT, ROLLBACK, EXIT";


/// Read–Evaluate–Print Loop (REPL) over any line source.
///
/// Reads commands from `input` until `EXIT` or end of input, executes
/// them against `db`, and writes responses to `output`. Only I/O errors
/// end the loop early.
///
/// # Example
/// ```
/// use txkv::{Database, repl_loop};
///
/// let mut db = Database::default();
/// let mut out = Vec::new();
/// repl_loop("SET 1 foo\nGET 1\n".as_bytes(), &mut out, &mut db).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "OK\nfoo\n");
/// ```
pub fn repl_loop<R, W>(input: R, output: &mut W, db: &mut Database) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for input_line in input.lines() {
        let full_command = input_line?;
        let (cmd, args) = parse_command(&full_command);

        if handle_command(&cmd, &args, db, output)? == CommandResult::Exit {
            break;
        }
    }
    output.flush()
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut segments = line.split_whitespace();
    let cmd = segments.next().unwrap_or("").to_uppercase();
    let args = segments.map(str::to_string).collect();

    (cmd, args)
}


/// Handles a single command and returns whether the REPL should continue.
///
/// Malformed commands print an `ERR:` line; they never end the loop.
pub fn handle_command<W: Write>(
    cmd: &str,
    args: &[String],
    db: &mut Database,
    out: &mut W,
) -> io::Result<CommandResult> {
    match cmd {
        // GET <id>
        "GET" => match single_id(cmd, args) {
            Ok(id) => writeln!(out, "{}", db.get(id).unwrap_or("NULL"))?,
            Err(msg) => writeln!(out, "{msg}")?,
        },

        // SET <id> <value...>
        "SET" => {
            if args.len() < 2 {
                writeln!(out, "ERR: SET requires an id and a value")?;
            } else {
                match parse_id(&args[0]) {
                    Ok(id) => {
                        db.set(id, args[1..].join(" "));
                        writeln!(out, "OK")?;
                    }
                    Err(msg) => writeln!(out, "{msg}")?,
                }
            }
        }

        // DEL <id>
        "DEL" => match single_id(cmd, args) {
            Ok(id) => {
                db.delete_by_id(id);
                writeln!(out, "OK")?;
            }
            Err(msg) => writeln!(out, "{msg}")?,
        },

        // DELVAL <value...>
        "DELVAL" => {
            if args.is_empty() {
                writeln!(out, "ERR: DELVAL requires a value")?;
            } else {
                db.delete_by_value(&args.join(" "));
                writeln!(out, "OK")?;
            }
        }

        "BEGIN" | "COMMIT" | "ROLLBACK" | "ABORT" => {
            if !args.is_empty() {
                writeln!(out, "ERR: {cmd} does not take any arguments")?;
            } else {
                let result = match cmd {
                    "BEGIN" => db.begin(),
                    "COMMIT" => db.commit(),
                    _ => db.rollback(),
                };
                match result {
                    Ok(()) => writeln!(out, "OK")?,
                    Err(e) => writeln!(out, "ERR: {e}")?,
                }
            }
        }

        "EXIT" | "QUIT" => {
            writeln!(out, "Exiting...")?;
            return Ok(CommandResult::Exit);
        }

        // Empty input
        "" => writeln!(out, "Enter a command.")?,

        _ => {
            writeln!(out, "ERR: command '{cmd}' not handled")?;
            writeln!(out, "{PROPER_SYNTAX}")?;
        }
    }

    Ok(CommandResult::Continue)
}


/// Extracts the only argument of `cmd` as an id.
fn single_id(cmd: &str, args: &[String]) -> Result<Id, String> {
    match args {
        [arg] => parse_id(arg),
        [] => Err(format!("ERR: {cmd} requires an id")),
        _ => Err(format!("ERR: Too many arguments for {cmd}")),
    }
}

fn parse_id(arg: &str) -> Result<Id, String> {
    arg.parse::<Id>()
        .map_err(|_| format!("ERR: invalid id '{arg}'"))
}



// =================================================================
// lib.rs Unit tests
// =================================================================
