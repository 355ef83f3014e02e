//! Publicist command-line entry point.

use clap::Parser;
use publicist::cli::{
    Cli, CommandOutput, Commands, CrewCommand, InputOverrides, handle_crew_show,
    handle_crew_validate, handle_publish_command, handle_tools_command,
};
use publicist::init_tracing;
use publicist::social::PostRequest;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format);
    info!("Starting Publicist v{}", env!("CARGO_PKG_VERSION"));

    let output = run(cli)?;
    println!("{}", output.text);

    if output.exit_code != 0 {
        std::process::exit(output.exit_code);
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<CommandOutput> {
    let output = match cli.command {
        Commands::Publish {
            platform,
            content,
            image_url,
            scheduled_time,
            seed,
        } => {
            let mut builder = PostRequest::builder();
            builder.platform(platform).content(content);
            if let Some(image_url) = image_url {
                builder.image_url(image_url);
            }
            if let Some(scheduled_time) = scheduled_time {
                builder.scheduled_time(scheduled_time);
            }
            let request = builder.build()?;
            handle_publish_command(&request, seed)?
        }
        Commands::Tools => handle_tools_command()?,
        Commands::Crew { command } => match command {
            CrewCommand::Show {
                manifest,
                company_name,
                target_platforms,
                industry,
            } => handle_crew_show(
                manifest.as_deref(),
                InputOverrides {
                    company_name,
                    target_platforms,
                    industry,
                },
            )?,
            CrewCommand::Validate {
                manifest,
                format,
                strict,
            } => handle_crew_validate(manifest.as_deref(), format, strict)?,
        },
    };
    Ok(output)
}
