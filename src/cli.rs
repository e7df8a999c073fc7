//! Command-line interface definitions for hashdupe.
//!
//! This module defines all CLI arguments using the clap derive API. The
//! surface is a single command: a required directory path plus options for
//! the hash algorithm, an extension filter, digest display, and the Pearson
//! table seed.
//!
//! # Example
//!
//! ```bash
//! # Find duplicates under a directory (MD5 by default)
//! hashdupe ~/Downloads
//!
//! # Restrict to .txt files and show the digest per group
//! hashdupe ~/Downloads --extension txt --print-hash
//!
//! # Use the 64-bit Pearson hash with a custom table seed
//! hashdupe ~/Downloads --hash hash64 --seed 99
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::hash::{HashAlgorithm, DEFAULT_TABLE_SEED};

/// Duplicate file finder with pluggable content hash algorithms.
///
/// hashdupe hashes every regular file under a directory and reports groups
/// of files that share a digest. Version-control metadata (`.git`) is
/// skipped.
#[derive(Debug, Parser)]
#[command(name = "hashdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory path to search for duplicates
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Only report groups whose representative path ends with this suffix
    ///
    /// Example: `--extension txt` restricts the report to .txt files.
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Hash algorithm to use
    #[arg(long, value_enum, value_name = "NAME", default_value = "hashmd5")]
    pub hash: HashAlgorithm,

    /// Include the computed digest in each group's header line
    #[arg(short = 'p', long = "print-hash", alias = "print_hash")]
    pub print_hash: bool,

    /// Seed for the Pearson permutation table
    ///
    /// The same seed always yields the same table, so digests from the
    /// Pearson algorithms stay comparable across runs.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TABLE_SEED)]
    pub seed: u64,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report itself
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::try_parse_from(["hashdupe", "/some/path"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/some/path"));
        assert_eq!(cli.hash, HashAlgorithm::Md5);
        assert_eq!(cli.seed, DEFAULT_TABLE_SEED);
        assert!(cli.extension.is_none());
        assert!(!cli.print_hash);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_missing_path_is_a_usage_error() {
        assert!(Cli::try_parse_from(["hashdupe"]).is_err());
    }

    #[test]
    fn test_cli_parse_all_hash_names() {
        let cases = [
            ("string_hash", HashAlgorithm::StringHash),
            ("hash8", HashAlgorithm::Hash8),
            ("hash64", HashAlgorithm::Hash64),
            ("hashfnv32a", HashAlgorithm::Fnv32a),
            ("hashmd5", HashAlgorithm::Md5),
        ];
        for (name, expected) in cases {
            let cli = Cli::try_parse_from(["hashdupe", "/path", "--hash", name]).unwrap();
            assert_eq!(cli.hash, expected, "for --hash {name}");
        }
    }

    #[test]
    fn test_cli_unknown_hash_name_fails_fast() {
        let result = Cli::try_parse_from(["hashdupe", "/path", "--hash", "hashsha1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_extension_and_print_hash() {
        let cli = Cli::try_parse_from([
            "hashdupe",
            "/path",
            "--extension",
            "txt",
            "--print-hash",
        ])
        .unwrap();
        assert_eq!(cli.extension.as_deref(), Some("txt"));
        assert!(cli.print_hash);
    }

    #[test]
    fn test_cli_print_hash_short_and_legacy_alias() {
        let cli = Cli::try_parse_from(["hashdupe", "/path", "-p"]).unwrap();
        assert!(cli.print_hash);

        let cli = Cli::try_parse_from(["hashdupe", "/path", "--print_hash"]).unwrap();
        assert!(cli.print_hash);
    }

    #[test]
    fn test_cli_parse_seed() {
        let cli = Cli::try_parse_from(["hashdupe", "/path", "--seed", "99"]).unwrap();
        assert_eq!(cli.seed, 99);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["hashdupe", "-v", "-q", "/path"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::try_parse_from(["hashdupe", "-vv", "/path"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
