use chrono::{Local, Timelike};
use clap::Parser;
use incilog::application::{
    init::init, manage_config::CONFIG_KEYS, AssumeYes, Confirm, ConfigService, ExportService,
    ListIncidentsService, LogIncidentService, RemoveIncidentsService,
};
use incilog::cli::{
    format_incident_detail, format_incident_list, requested_filter, Cli, Commands, TerminalPrompt,
};
use incilog::domain::NewIncident;
use incilog::error::IncilogError;
use incilog::infrastructure::FileSystemRepository;
use incilog::logging::{init_logging, Verbosity};

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompt::stdio())
    }
}

fn run(cli: Cli) -> Result<(), IncilogError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized incilog at {}", path.display());
            Ok(())
        }
        Commands::Log {
            location,
            description,
            severity,
            person,
            injury_type,
            witnesses,
            date,
            time,
        } => {
            let now = Local::now();
            let new = NewIncident {
                date: date.unwrap_or_else(|| now.date_naive()),
                time: time.unwrap_or_else(|| {
                    now.time()
                        .with_second(0)
                        .and_then(|t| t.with_nanosecond(0))
                        .unwrap_or_else(|| now.time())
                }),
                location,
                description,
                injury_type,
                severity,
                person_involved: person,
                witnesses,
            };

            let repo = FileSystemRepository::discover()?;
            let incident = LogIncidentService::new(repo).execute(new)?;
            println!("Incident logged successfully");
            println!("ID: {}", incident.id);
            Ok(())
        }
        Commands::List {
            severity,
            all,
            limit,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListIncidentsService::new(repo);
            let filter = service.effective_filter(requested_filter(severity, all))?;
            let incidents = service.list(filter, limit)?;
            println!("{}", format_incident_list(&incidents).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let incident = ListIncidentsService::new(repo).show(&id)?;
            print!("{}", format_incident_detail(&incident));
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let repo = FileSystemRepository::discover()?;
            let mut confirm = confirmer(yes);
            RemoveIncidentsService::new(repo).delete(&id, confirm.as_mut())?;
            println!("Incident deleted");
            Ok(())
        }
        Commands::Clear { yes } => {
            let repo = FileSystemRepository::discover()?;
            let mut confirm = confirmer(yes);
            let removed = RemoveIncidentsService::new(repo).clear(confirm.as_mut())?;
            if removed == 0 {
                println!("No incidents to clear");
            } else {
                println!("All incidents cleared");
            }
            Ok(())
        }
        Commands::Export {
            severity,
            all,
            output,
        } => {
            let repo = FileSystemRepository::discover()?;
            let filter = ListIncidentsService::new(repo.clone())
                .effective_filter(requested_filter(severity, all))?;
            let html = ExportService::new(repo).execute(filter, output.as_deref())?;
            match output {
                Some(path) => println!("Exported to {}", path.display()),
                None => print!("{}", html),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("confirm_destructive = {}", config.confirm_destructive);
                println!("default_filter = {}", config.default_filter);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: incilog config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
                Ok(())
            }
        }
    }
}
