use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use clap::Parser;

use accounter_core::{
    AccountOverview, AccountTimezone, Action, AmountKind, MemberRole, Operation, OperationFilter,
    UserId, authorize, parse_occurred_at, setup_logging,
};

/// Summarize the operations of an account as JSON.
///
/// Reads a JSON array of operations and prints the sorted operations, the
/// balance and both chart series.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON array of operations, or `-` to read from stdin.
    #[arg(long, short)]
    input: PathBuf,

    /// The account timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    #[arg(long, short, env = "ACCOUNTER_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    /// The role of the user asking for the report.
    #[arg(long, short, default_value = "owner")]
    role: MemberRole,

    /// The ID of the user asking for the report.
    #[arg(long, default_value_t = 0)]
    user_id: i64,

    /// Only include operations on or after this day (YYYY-MM-DD).
    #[arg(long)]
    from: Option<String>,

    /// Only include operations on or before this day (YYYY-MM-DD).
    #[arg(long)]
    to: Option<String>,

    /// Only include operations of this kind.
    #[arg(long)]
    kind: Option<AmountKind>,

    /// Only include recurring (`true`) or one-off (`false`) operations.
    #[arg(long)]
    periodic: Option<bool>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(&args.log_level);

    authorize(
        UserId::new(args.user_id),
        Some(args.role),
        Action::ViewOperations,
    )?;

    let timezone = AccountTimezone::from_name(&args.timezone)?;

    let operations = read_operations(&args.input)?;
    tracing::info!("Read {} operations from {:?}", operations.len(), args.input);

    let filter = OperationFilter {
        date_from: args
            .from
            .as_deref()
            .map(parse_occurred_at)
            .transpose()?
            .map(|date_time| date_time.date()),
        date_to: args
            .to
            .as_deref()
            .map(parse_occurred_at)
            .transpose()?
            .map(|date_time| date_time.date()),
        periodic: args.periodic,
        kind: args.kind,
    };
    let operations = filter.apply(&operations, timezone);
    tracing::debug!("{} operations left after filtering", operations.len());

    let overview = AccountOverview::new(&operations, timezone);

    let output = if args.pretty {
        serde_json::to_string_pretty(&overview)?
    } else {
        serde_json::to_string(&overview)?
    };
    println!("{output}");

    Ok(())
}

fn read_operations(input: &Path) -> Result<Vec<Operation>, Box<dyn Error>> {
    let mut text = String::new();

    if input.as_os_str() == "-" {
        io::stdin().read_to_string(&mut text)?;
    } else {
        BufReader::new(File::open(input)?).read_to_string(&mut text)?;
    }

    let operations = serde_json::from_str(&text).map_err(accounter_core::Error::from)?;

    Ok(operations)
}
