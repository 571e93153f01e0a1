mod app;
mod mock;
mod paths;
mod text;

use std::fs::File;

use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use tabula::ConfigError;
use tabula::TableError;
use tabula::expansion::SubrowKind;
use tabula::format::FormatConfig;
use tabula::format::Formatters;
use tabula::format::Locale;
use tabula::render::TreeBackend;
use thiserror::Error;

use crate::app::OrderTable;
use crate::mock::Order;

const LOCALE_VAR: &str = "TABULA_LOCALE";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid sample data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Row '{0}' has no open delete confirmation, run delete:{0} first")]
    Unconfirmed(String),

    #[error("Unknown step '{0}', expected expand|delete|cancel|confirm:<id> or loading")]
    Usage(String),
}

/// One interaction applied to the table between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Expand(String),
    Delete(String),
    Close(String),
    Confirm(String),
    Loading,
}

impl std::str::FromStr for Step {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "loading" {
            return Ok(Step::Loading);
        }
        let (verb, id) = s.split_once(':').ok_or_else(|| DemoError::Usage(s.to_string()))?;
        let id = id.to_string();
        match verb {
            "expand" => Ok(Step::Expand(id)),
            "delete" => Ok(Step::Delete(id)),
            "close" | "cancel" => Ok(Step::Close(id)),
            "confirm" => Ok(Step::Confirm(id)),
            _ => Err(DemoError::Usage(s.to_string())),
        }
    }
}

fn init_logging() {
    let file = paths::log_file()
        .and_then(|path| {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).ok()?;
            }
            File::create(path).ok()
        })
        .or_else(|| File::create("tabula-demo.log").ok());
    let Some(file) = file else {
        eprintln!("Logging disabled: no writable log file");
        return;
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn load_config() -> Result<FormatConfig, DemoError> {
    let mut config = match paths::config_file() {
        Some(path) if path.exists() => {
            log::info!("Loading format config from {}", path.display());
            FormatConfig::load(&path)?
        }
        _ => FormatConfig::default(),
    };

    if let Ok(tag) = std::env::var(LOCALE_VAR) {
        match Locale::from_tag(&tag) {
            Some(locale) => config = config.with_locale(locale),
            None => log::warn!("Ignoring unknown locale '{}' from {}", tag, LOCALE_VAR),
        }
    }
    Ok(config)
}

fn print(table: &OrderTable, title: &str) {
    println!("$ {title}");
    println!("{}\n", text::render(&table.render(&mut TreeBackend::new())));
}

fn apply(
    table: OrderTable,
    orders: &mut Vec<Order>,
    formatters: &Formatters,
    step: &Step,
) -> Result<OrderTable, DemoError> {
    let mut table = table;
    match step {
        Step::Expand(id) => {
            table.toggle(id, SubrowKind::Content)?;
        }
        Step::Delete(id) => {
            table.toggle(id, SubrowKind::Delete)?;
        }
        Step::Close(id) => {
            table.close(id)?;
        }
        Step::Confirm(id) => {
            if !orders.iter().any(|order| &order.id == id) {
                return Err(TableError::unknown_row(id).into());
            }
            if table.expansion(id).open_kind() != Some(SubrowKind::Delete) {
                return Err(DemoError::Unconfirmed(id.clone()));
            }
            orders.retain(|order| &order.id != id);
            log::info!("Deleted order '{}'", id);
            table = app::remount(&table, orders.clone(), formatters.clone())?;
        }
        Step::Loading => table.set_loading(true),
    }
    Ok(table)
}

fn run() -> Result<(), DemoError> {
    let steps = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let formatters = Formatters::new(load_config()?);
    let mut orders = mock::orders()?;
    log::info!("Loaded {} orders", orders.len());

    let mut table = app::orders_table(orders.clone(), formatters.clone())?;
    print(&table, "initial");

    for (step, arg) in steps.iter().zip(std::env::args().skip(1)) {
        table = apply(table, &mut orders, &formatters, step)?;
        print(&table, &arg);
    }
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("expand:Row 1".parse::<Step>().unwrap(), Step::Expand("Row 1".into()));
        assert_eq!("cancel:Row 2".parse::<Step>().unwrap(), Step::Close("Row 2".into()));
        assert_eq!("loading".parse::<Step>().unwrap(), Step::Loading);
        assert!(matches!("jump:Row 1".parse::<Step>(), Err(DemoError::Usage(_))));
        assert!(matches!("expand".parse::<Step>(), Err(DemoError::Usage(_))));
    }

    #[test]
    fn test_confirm_removes_row() {
        let formatters = Formatters::default();
        let mut orders = mock::orders().unwrap();
        let table = app::orders_table(orders.clone(), formatters.clone()).unwrap();

        let table = apply(table, &mut orders, &formatters, &Step::Delete("Row 3".into())).unwrap();
        let table = apply(table, &mut orders, &formatters, &Step::Confirm("Row 3".into())).unwrap();

        assert_eq!(orders.len(), 4);
        assert_eq!(table.rows().len(), 4);
        assert!(table.rows().iter().all(|order| order.id != "Row 3"));
    }

    #[test]
    fn test_confirm_needs_open_confirmation() {
        let formatters = Formatters::default();
        let mut orders = mock::orders().unwrap();
        let table = app::orders_table(orders.clone(), formatters.clone()).unwrap();

        let result = apply(table, &mut orders, &formatters, &Step::Confirm("Row 1".into()));
        assert!(matches!(result, Err(DemoError::Unconfirmed(id)) if id == "Row 1"));
        assert_eq!(orders.len(), 5);
    }

    #[test]
    fn test_confirm_after_cancel() {
        let formatters = Formatters::default();
        let mut orders = mock::orders().unwrap();
        let table = app::orders_table(orders.clone(), formatters.clone()).unwrap();

        let table = apply(table, &mut orders, &formatters, &Step::Delete("Row 1".into())).unwrap();
        let table = apply(table, &mut orders, &formatters, &Step::Close("Row 1".into())).unwrap();
        let result = apply(table, &mut orders, &formatters, &Step::Confirm("Row 1".into()));

        assert!(matches!(result, Err(DemoError::Unconfirmed(_))));
        assert_eq!(orders.len(), 5);
    }

    #[test]
    fn test_confirm_unknown_row() {
        let formatters = Formatters::default();
        let mut orders = mock::orders().unwrap();
        let table = app::orders_table(orders.clone(), formatters.clone()).unwrap();

        let result = apply(table, &mut orders, &formatters, &Step::Confirm("Row 9".into()));
        assert!(matches!(result, Err(DemoError::Table(TableError::UnknownRow { .. }))));
    }
}
