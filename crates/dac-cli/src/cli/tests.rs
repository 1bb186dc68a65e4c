use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_sources() {
    match parse(&["dac", "sources"]) {
        CliCommand::Sources => {}
        _ => panic!("expected Sources"),
    }
}

#[test]
fn cli_parse_list() {
    match parse(&["dac", "list", "ISTAT"]) {
        CliCommand::List { source, output } => {
            assert_eq!(source, "ISTAT");
            assert!(output.is_none());
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_output() {
    match parse(&["dac", "list", "INPS", "--output", "datasets.csv"]) {
        CliCommand::List { source, output } => {
            assert_eq!(source, "INPS");
            assert_eq!(output.as_deref(), Some(std::path::Path::new("datasets.csv")));
        }
        _ => panic!("expected List with --output"),
    }
}

#[test]
fn cli_parse_check_defaults() {
    match parse(&["dac", "check", "ISTAT"]) {
        CliCommand::Check {
            source,
            input,
            jobs,
            output,
            no_store,
        } => {
            assert_eq!(source, "ISTAT");
            assert!(input.is_none());
            assert!(jobs.is_none());
            assert!(output.is_none());
            assert!(!no_store);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_jobs_and_output() {
    match parse(&["dac", "check", "ECB", "--jobs", "4", "--output", "report.csv"]) {
        CliCommand::Check { source, jobs, output, .. } => {
            assert_eq!(source, "ECB");
            assert_eq!(jobs, Some(4));
            assert_eq!(output.as_deref(), Some(std::path::Path::new("report.csv")));
        }
        _ => panic!("expected Check with --jobs"),
    }
}

#[test]
fn cli_parse_check_input_no_store() {
    match parse(&["dac", "check", "INPS", "--input", "saved.csv", "--no-store"]) {
        CliCommand::Check { input, no_store, .. } => {
            assert_eq!(input.as_deref(), Some(std::path::Path::new("saved.csv")));
            assert!(no_store);
        }
        _ => panic!("expected Check with --input"),
    }
}

#[test]
fn cli_parse_status() {
    match parse(&["dac", "status"]) {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_export_latest() {
    match parse(&["dac", "export"]) {
        CliCommand::Export { run_id, output } => {
            assert!(run_id.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_run_and_output() {
    match parse(&["dac", "export", "7", "--output", "out.csv"]) {
        CliCommand::Export { run_id, output } => {
            assert_eq!(run_id, Some(7));
            assert_eq!(output.as_deref(), Some(std::path::Path::new("out.csv")));
        }
        _ => panic!("expected Export with run id"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["dac", "remove", "99"]) {
        CliCommand::Remove { id } => assert_eq!(id, 99),
        _ => panic!("expected Remove"),
    }
}
