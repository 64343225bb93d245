//! uoacal-client CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uoacal_client::cli::{Cli, Commands, OutputFormat};
use uoacal_client::output::{format_output, json, pretty};
use uoacal_client::config::DEFAULT_LOG_FILTER;
use uoacal_client::{CalendarClient, ClientConfig, ClientError};
use uoacal_core::calendar::NewEvent;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match format {
                OutputFormat::Json => eprintln!("{}", json::format_error_json(&err)),
                OutputFormat::Pretty => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let client =
        CalendarClient::new(ClientConfig::new(cli.api_token).with_base_url(&cli.base_url));

    match cli.command {
        Commands::Calendars(calendars_cmd) => {
            use uoacal_client::cli::calendars::CalendarsAction;
            match calendars_cmd.action {
                CalendarsAction::List => {
                    let calendars = client.list_calendars().await?.data;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&calendars, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_calendars(&calendars))
                        }
                    }
                }
                CalendarsAction::Add { name } => {
                    let calendar = client.add_calendar(name).await?.data;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&calendar, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_calendar(&calendar))
                        }
                    }
                }
                CalendarsAction::Delete { id } => {
                    client.delete_calendar(id).await?;
                    if !cli.quiet {
                        println!("Deleted calendar {}", id);
                    }
                }
            }
        }
        Commands::Events(events_cmd) => {
            use uoacal_client::cli::events::EventsAction;
            match events_cmd.action {
                EventsAction::Add {
                    calendar_id,
                    title,
                    start,
                    end,
                } => {
                    let event = client
                        .add_event(calendar_id, &NewEvent::new(title, start, end))
                        .await?
                        .data;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Find {
                    calendar_id,
                    start,
                    end,
                } => {
                    let events = client.find_events(calendar_id, start, end).await?.data;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                    }
                }
                EventsAction::Delete { calendar_id, id } => {
                    client.delete_event(calendar_id, id).await?;
                    if !cli.quiet {
                        println!("Deleted event {} from calendar {}", id, calendar_id);
                    }
                }
            }
        }
    }

    Ok(())
}
