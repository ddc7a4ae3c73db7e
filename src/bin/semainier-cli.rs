#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use semainier::{
    io,
    model::{Employee, EmployeeId},
    render::RenderFormat,
    session::Session,
    shell::{Flow, Shell, DEFAULT_STATE_FILE},
    storage::JsonStorage,
    template::{export_template_json, load_template_from_file, WeekTemplate},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'état (employés + planning), chargé au démarrage
    #[arg(long, alias = "load", global = true, env = "SEMAINIER_STATE", default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Modèle de semaine JSON (sinon la semaine standard)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Sauvegarde l'état dans ce fichier en fin d'exécution
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    /// Exporte le planning en CSV en fin d'exécution
    #[arg(long, global = true)]
    export_csv: Option<PathBuf>,

    /// Exporte le planning en HTML en fin d'exécution
    #[arg(long, global = true)]
    export_html: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un employé
    AddEmployee {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long, default_value_t = 40)]
        max_hours: u32,
        /// liste "Monday,Tuesday,..." (défaut : lundi à vendredi)
        #[arg(long)]
        days: Option<String>,
    },

    /// Retirer un employé (les créneaux déjà assignés ne sont pas modifiés)
    RemoveEmployee {
        #[arg(long)]
        id: String,
    },

    /// Lister les employés
    ListEmployees,

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Créer la semaine à partir du modèle (remplace le planning courant)
    CreateSchedule {
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
    },

    /// Assigner un employé à un créneau
    Assign {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// index du créneau dans la journée (à partir de 0)
        #[arg(long)]
        shift: usize,
        #[arg(long)]
        employee: String,
    },

    /// Afficher le planning
    Show {
        /// text, csv ou html
        #[arg(long, default_value = "text")]
        format: RenderFormat,
    },

    /// Écrire le modèle de semaine courant en JSON
    ExportTemplate {
        #[arg(long)]
        out: PathBuf,
    },

    /// Shell interactif (par défaut)
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = JsonStorage::open(&cli.state);
    let mut session = Session::new();
    if storage.exists() {
        // un état illisible n'est jamais écrasé : on s'arrête
        session
            .load(&storage)
            .with_context(|| format!("loading {}", cli.state.display()))?;
    }

    let template = match &cli.template {
        Some(path) => load_template_from_file(path)?,
        None => WeekTemplate::standard(),
    };

    let code = match cli.cmd.unwrap_or(Commands::Shell) {
        Commands::AddEmployee {
            id,
            name,
            department,
            max_hours,
            days,
        } => {
            let mut employee = Employee::new(id, name).with_max_hours(max_hours);
            employee.department = department;
            if let Some(days) = days {
                employee = employee.with_available_days(io::parse_days(&days)?);
            }
            println!("Added employee: {}", employee.name);
            session.add_employee(employee);
            session.save(&storage)?;
            0
        }
        Commands::RemoveEmployee { id } => {
            let removed = session.remove_employee(&EmployeeId::new(&id));
            println!("Removed {removed} employee(s) with id {id}");
            session.save(&storage)?;
            0
        }
        Commands::ListEmployees => {
            for e in session.roster().employees() {
                let days: Vec<&str> = e.available_days.iter().map(|d| d.name()).collect();
                println!(
                    "{} | {} | {} | {}h | {}",
                    e.id,
                    e.name,
                    e.department.as_deref().unwrap_or("-"),
                    e.max_hours_per_week,
                    days.join(",")
                );
            }
            0
        }
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(&csv)?;
            println!("Imported {} employee(s)", employees.len());
            session.add_employees(employees);
            session.save(&storage)?;
            0
        }
        Commands::CreateSchedule { start } => {
            session.create_weekly_schedule(start, &template)?;
            println!("Weekly schedule created from {start}");
            session.save(&storage)?;
            0
        }
        Commands::Assign {
            date,
            shift,
            employee,
        } => match session.assign_employee_to_shift(date, shift, &EmployeeId::new(&employee)) {
            Ok(()) => {
                println!("Assignment successful");
                session.save(&storage)?;
                0
            }
            Err(err) => {
                eprintln!("Assignment failed ({}): {err}", err.kind());
                // Code 2 = refus métier, état inchangé
                2
            }
        },
        Commands::Show { format } => {
            print!("{}", session.render(format)?);
            0
        }
        Commands::ExportTemplate { out } => {
            export_template_json(&out, &template)?;
            println!("Template written to {}", out.display());
            0
        }
        Commands::Shell => {
            run_shell(&mut session, template)?;
            0
        }
    };

    if let Some(path) = &cli.save {
        session.save(&JsonStorage::open(path))?;
        println!("Data saved to {}", path.display());
    }
    if let Some(path) = &cli.export_csv {
        io::export_schedule(path, &session, RenderFormat::Csv)?;
        println!("Schedule exported to {}", path.display());
    }
    if let Some(path) = &cli.export_html {
        io::export_schedule(path, &session, RenderFormat::Html)?;
        println!("Schedule exported to {}", path.display());
    }

    std::process::exit(code);
}

fn run_shell(session: &mut Session, template: WeekTemplate) -> Result<()> {
    let mut shell = Shell::new(session, template);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Work Schedule Generator");
    println!("Type 'help' for commands");

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            // EOF
            break;
        };
        if shell.handle_line(&line?, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
