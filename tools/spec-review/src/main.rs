use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use spec_review::config::{Cli, Mode};
use spec_review::github::GitHubClient;
use spec_review::probe::HttpLinkProbe;
use spec_review::review::{self, ReviewSummary};
use spec_review::{report, reporter, telemetry, ReviewError};
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    telemetry::init_tracing(cli.log_json, level);

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    };

    process::exit(code);
}

fn run(cli: &Cli) -> spec_review::Result<()> {
    let probe = HttpLinkProbe::new();

    let (summary, print_report): (ReviewSummary, bool) = match Mode::from_cli(cli)? {
        Mode::PullRequest(target) => {
            let client =
                GitHubClient::new(&target.api_url, &target.repository, target.token.expose());
            let summary =
                review::review_pull_request(&client, &probe, target.number, target.dry_run)?;
            (summary, target.dry_run)
        }
        Mode::Local {
            body_file,
            files_file,
        } => {
            let body = read(&body_file)?;
            let listing = read(&files_file)?;
            let paths = listing.lines().map(str::trim).filter(|line| !line.is_empty());
            (review::evaluate(&body, paths, &probe)?, true)
        }
    };

    let mut stdout = io::stdout().lock();
    reporter::write_results(&mut stdout, &summary.files, &summary.outcomes)?;
    if print_report {
        writeln!(stdout, "{}", report::comment_body(&summary.report))?;
    }

    Ok(())
}

fn read(path: &Path) -> spec_review::Result<String> {
    fs::read_to_string(path).map_err(|source| ReviewError::Read {
        path: path.to_path_buf(),
        source,
    })
}
