#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # rollbook
//!
//! An interactive console student record keeper: add students, enroll them in
//! courses with credits, record marks and attendance, and view derived letter
//! grades, debarment status, and CGPA.

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use rollbook::{config::CreditPolicy, menu, registry::StudentRegistry};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Command-line options.
#[derive(Debug, Clone)]
struct Opts {
    /// Whether credit updates require prior enrollment.
    strict_credits: bool,
}

/// Parse the command line arguments and return an `Opts`
fn options() -> Opts {
    let strict_credits = long("strict-credits")
        .help("Ignore credit updates for courses a student is not enrolled in")
        .switch();

    construct!(Opts { strict_credits })
        .to_options()
        .descr("A console student record keeper")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options();
    let policy = if opts.strict_credits {
        CreditPolicy::Strict
    } else {
        CreditPolicy::from_env()
    };

    let mut registry = StudentRegistry::new();
    menu::run(&mut registry, policy)
}
