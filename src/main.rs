use clap::Parser;

use signin_guard::cli::{Cli, ColorChoice};
use signin_guard::github::{GitHubHost, ReqwestClient, TriggerContext};
use signin_guard::output::{
    ColorMode, CommentFormatter, ReportFormatter, TextFormatter, print_error, print_warning,
};
use signin_guard::rules::{self, ValidationReport};
use signin_guard::{EXIT_FAILURE, EXIT_SUCCESS, SigninGuardError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(report) => {
            if report.passed {
                EXIT_SUCCESS
            } else {
                EXIT_FAILURE
            }
        }
        Err(e) => {
            print_error(&e.to_string());
            EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> signin_guard::Result<ValidationReport> {
    // 1. Resolve the pull request coordinates and credentials.
    let context = TriggerContext::resolve(cli)?;
    let token = cli.token.as_deref().ok_or_else(|| {
        SigninGuardError::Context("no API token; set GITHUB_TOKEN or pass --token".to_string())
    })?;

    let client = ReqwestClient::new(token)?;
    let host = GitHubHost::new(&client, &cli.api_url, context.clone());

    // 2. Fetch the complete change list. A fetch failure or an empty pull
    //    request aborts the run with no report.
    let records = host.list_changed_files()?;
    if records.is_empty() {
        return Err(SigninGuardError::EmptyChangeList(context.pr_number));
    }

    // 3. Evaluate the rule sequence.
    let report = rules::evaluate(&records, &host);

    // 4. Console report.
    if !cli.quiet {
        let formatter = TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose);
        print!("{}", formatter.format(&report));
    }

    // 5. PR comment, best-effort: posting failures are logged and do not
    //    change the verdict or exit code.
    post_comment(cli, &context, &host, &report);

    Ok(report)
}

fn post_comment<C: signin_guard::github::HttpClient>(
    cli: &Cli,
    context: &TriggerContext,
    host: &GitHubHost<'_, C>,
    report: &ValidationReport,
) {
    if cli.no_comment {
        return;
    }
    if !context.from_pull_request_event {
        if !cli.quiet {
            println!("Not a pull request event; skipping comment.");
        }
        return;
    }

    let body = CommentFormatter.format(report);
    if let Err(e) = host.post_comment(&body) {
        print_warning(&format!("could not post PR comment: {e}"));
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
