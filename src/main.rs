use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};

use hwinv::inventory::{
    AssetKind, Backend, Date, FileBackend, Inventory, NewAsset, StoreError,
};

/// Hardware kind, spelled for the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Computer,
    Printer,
    Server,
    Router,
    Switch,
    Other,
}

impl From<KindArg> for AssetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Computer => AssetKind::Computer,
            KindArg::Printer => AssetKind::Printer,
            KindArg::Server => AssetKind::Server,
            KindArg::Router => AssetKind::Router,
            KindArg::Switch => AssetKind::Switch,
            KindArg::Other => AssetKind::Other,
        }
    }
}

/// Ordering for `list --sort`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// By purchase date (insertion sort)
    Purchase,
    /// By last maintenance date (bubble sort)
    Maintenance,
}

#[derive(Parser)]
#[command(name = "hwinv")]
#[command(about = "Track hardware assets in a delimited flat-file inventory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print how long the command took
    #[arg(long, global = true)]
    timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new asset
    Register {
        /// Asset name
        name: String,

        /// Manufacturer name
        manufacturer: String,

        /// Hardware kind
        #[arg(long, value_enum, default_value_t = KindArg::Other)]
        kind: KindArg,

        /// Purchase date (DD/MM/YYYY)
        #[arg(long)]
        purchased: Date,

        /// Purchase value
        #[arg(long)]
        value: f64,

        /// Useful life in years
        #[arg(long)]
        life: u32,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// Record a maintenance date for an asset
    Maintain {
        /// Asset id
        id: u32,

        /// Maintenance date (DD/MM/YYYY)
        date: Date,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// Remove an asset
    Remove {
        /// Asset id
        id: u32,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// List assets, optionally filtered by kind or sorted by date
    List {
        /// Only show assets of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Sort the listing by date
        #[arg(long, value_enum, conflicts_with = "kind")]
        sort: Option<SortArg>,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// Look up one asset by id
    Find {
        /// Asset id
        id: u32,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// Straight-line depreciation report
    Depreciation {
        /// Reference date (defaults to the system date)
        #[arg(long)]
        today: Option<Date>,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// List assets past their useful life
    Obsolete {
        /// Reference date (defaults to the system date)
        #[arg(long)]
        today: Option<Date>,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },

    /// List assets overdue for maintenance
    Pending {
        /// Threshold in whole months since the last maintenance
        #[arg(long, default_value_t = 6)]
        months: u32,

        /// Reference date (defaults to the system date)
        #[arg(long)]
        today: Option<Date>,

        /// Inventory file
        #[arg(long, default_value = "inventory.csv", env = "HWINV_FILE")]
        file: PathBuf,
    },
}

fn today_or(value: Option<Date>) -> Date {
    value.unwrap_or_else(|| {
        let now = chrono::Local::now().date_naive();
        Date {
            year: u16::try_from(now.year()).unwrap_or(u16::MAX),
            month: now.month() as u8,
            day: now.day() as u8,
        }
    })
}

fn run(command: Commands) -> Result<(), StoreError> {
    match command {
        Commands::Register {
            name,
            manufacturer,
            kind,
            purchased,
            value,
            life,
            file,
        } => {
            let backend = FileBackend::new(file);
            let mut inventory = Inventory::open(&backend)?;
            let record = inventory.register(NewAsset {
                name,
                manufacturer,
                kind: kind.into(),
                purchase_date: purchased,
                purchase_value: value,
                useful_life_years: life,
            })?;
            println!("registered asset {}", record.id);
            inventory.close()
        }
        Commands::Maintain { id, date, file } => {
            let backend = FileBackend::new(file);
            let mut inventory = Inventory::open(&backend)?;
            inventory.register_maintenance(id, date)?;
            println!("maintenance on {date} recorded for asset {id}");
            inventory.close()
        }
        Commands::Remove { id, file } => {
            let backend = FileBackend::new(file);
            let mut inventory = Inventory::open(&backend)?;
            let removed = inventory.remove(id)?;
            println!("removed {removed}");
            inventory.close()
        }
        Commands::List { kind, sort, file } => {
            let backend = FileBackend::new(file);
            let inventory = Inventory::open(&backend)?;
            match (kind, sort) {
                (Some(kind), _) => {
                    let matching = inventory.by_kind(kind.into());
                    for record in &matching {
                        println!("{record}");
                    }
                    println!("{} assets of kind {}", matching.len(), AssetKind::from(kind));
                }
                (None, Some(SortArg::Purchase)) => {
                    for record in inventory.sorted_by_purchase_date().iter() {
                        println!("{record}");
                    }
                    println!("{} assets", inventory.len());
                }
                (None, Some(SortArg::Maintenance)) => {
                    for record in inventory.sorted_by_maintenance_date().iter() {
                        println!("{record}");
                    }
                    println!("{} assets", inventory.len());
                }
                (None, None) => {
                    for record in inventory.records() {
                        println!("{record}");
                    }
                    println!("{} assets", inventory.len());
                }
            }
            Ok(())
        }
        Commands::Find { id, file } => {
            let backend = FileBackend::new(file);
            match backend.find_by_id(id)? {
                Some(record) => println!("{record}"),
                None => println!("no asset with id {id}"),
            }
            Ok(())
        }
        Commands::Depreciation { today, file } => {
            let backend = FileBackend::new(file);
            let inventory = Inventory::open(&backend)?;
            let today = today_or(today);
            let report = inventory.depreciation_report(today);
            println!("depreciation at {today}");
            for line in &report.lines {
                println!(
                    "ID: {} | {} | purchase {:.2} | depreciation {:.2} | current {:.2}",
                    line.id, line.name, line.purchase_value, line.depreciation, line.current_value
                );
            }
            println!(
                "TOTAL | purchase {:.2} | depreciation {:.2} | current {:.2}",
                report.total_purchase_value, report.total_depreciation, report.total_current_value
            );
            Ok(())
        }
        Commands::Obsolete { today, file } => {
            let backend = FileBackend::new(file);
            let mut inventory = Inventory::open(&backend)?;
            let today = today_or(today);
            let obsolete = inventory.obsolete(today);
            for record in &obsolete {
                println!("{record}");
            }
            println!("{} obsolete assets at {today}", obsolete.len());
            // Persist the recomputed flags on the way out.
            inventory.close()
        }
        Commands::Pending {
            months,
            today,
            file,
        } => {
            let backend = FileBackend::new(file);
            let inventory = Inventory::open(&backend)?;
            let today = today_or(today);
            let due = inventory.pending_maintenance(today, months);
            for entry in &due {
                println!(
                    "{} | {} months since maintenance",
                    entry.record, entry.months_since
                );
            }
            println!("{} assets over {months} months at {today}", due.len());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();
    let result = run(cli.command);
    if cli.timing {
        eprintln!("elapsed: {:?}", started.elapsed());
    }
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
