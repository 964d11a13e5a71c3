//! sumbu-cli
//! =========
//!
//! Command-line interface for the `sumbu-core` Sumbu Filosofi engine.
//!
//! This crate primarily provides a binary (`sumbu`). The library target only
//! carries this overview so that the crate documentation renders.
//!
//! Basic usage:
//!
//! ```text
//! sumbu --help
//! sumbu stats
//! sumbu categories --locale en
//! sumbu show keraton
//! sumbu filter --category heritage,museum
//! sumbu nearby --from tugu --limit 3
//! sumbu search "alun-alun" --type location,event
//! sumbu suggest ker
//! sumbu distance -7.7826 110.3671 -7.8053 110.3643
//! ```
//!
//! Every subcommand accepts `--json` for machine-readable output and
//! `--input <path>` to query a dataset other than the bundled one.
//!
//! For programmatic access use the `sumbu-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
