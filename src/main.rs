//! Interactive text front-end for the employee console.

use std::env;
use std::io::{self, BufRead, Write};

use dotenvy::dotenv;
use tokio::time::timeout;

use employee_console::build_console;
use employee_console::console::EmployeeConsole;
use employee_console::domain::employee::format_salary;
use employee_console::domain::types::{Department, EmployeeId, PageSize};
use employee_console::forms::employee::EmployeeForm;
use employee_console::models::config::ConsoleConfig;
use employee_console::pagination::PageMarker;
use employee_console::repository::InMemoryRepository;
use employee_console::services::ServiceResult;

const HELP: &str = "\
commands:
  search [text]          filter by name, email or department (empty clears)
  page <n> | next | prev  navigate
  size <n>               rows per page
  add <first;last;email;department;salary;YYYY-MM-DD[;active]>
  edit <id> <first;last;email;department;salary;YYYY-MM-DD[;active]>
  delete <id>
  show | help | quit";

type Console = EmployeeConsole<InMemoryRepository>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ConsoleConfig::load("config", &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading console config: {err}");
            std::process::exit(1);
        }
    };

    let seed = env::var("APP_SEED").ok().and_then(|s| s.parse().ok());
    let mut console = match build_console(&config, seed).await {
        Ok(console) => console,
        Err(err) => {
            log::error!("Failed to start console: {err}");
            std::process::exit(1);
        }
    };

    render(&console);
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(err) = io::stdout().flush() {
            log::warn!("Failed to flush prompt: {err}");
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::error!("Failed to read input: {err}");
                break;
            }
        }

        let (command, rest) = line
            .trim()
            .split_once(' ')
            .map_or((line.trim(), ""), |(command, rest)| (command, rest.trim()));

        let outcome = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "show" => Ok(()),
            "search" => search(&mut console, &config, rest).await,
            "next" => console.change_page(console.current_page() + 1).await,
            "prev" => {
                let page = console.current_page().saturating_sub(1);
                console.change_page(page).await
            }
            "page" => match rest.parse() {
                Ok(page) => console.change_page(page).await,
                Err(_) => {
                    println!("page expects a number");
                    continue;
                }
            },
            "size" => match rest.parse().ok().and_then(|size| PageSize::new(size).ok()) {
                Some(size) => console.set_page_size(size).await,
                None => {
                    let sizes: Vec<String> = PageSize::all().map(|s| s.to_string()).collect();
                    println!("size must be one of {}", sizes.join(", "));
                    continue;
                }
            },
            "add" => console.submit(parse_form(rest), None).await.map(|_| ()),
            "edit" => match rest.split_once(' ').and_then(|(id, fields)| {
                let id = id.parse().ok().and_then(|id| EmployeeId::new(id).ok())?;
                Some((id, fields))
            }) {
                Some((id, fields)) => console.submit(parse_form(fields), Some(id)).await.map(|_| ()),
                None => {
                    println!("usage: edit <id> <fields>");
                    continue;
                }
            },
            "delete" => match rest.parse().ok().and_then(|id| EmployeeId::new(id).ok()) {
                Some(id) => console.delete(id).await.map(|_| ()),
                None => {
                    println!("usage: delete <id>");
                    continue;
                }
            },
            other => {
                println!("unknown command {other:?}, try `help`");
                continue;
            }
        };

        match outcome {
            Ok(()) => render(&console),
            Err(err) => println!("error: {err}"),
        }
    }
}

async fn search(console: &mut Console, config: &ConsoleConfig, text: &str) -> ServiceResult<()> {
    console.search(text);
    // Settling on the term already in use publishes nothing.
    match timeout(config.debounce_delay() * 2, console.settle_search()).await {
        Ok(result) => result,
        Err(_) => console.apply_search().await,
    }
}

/// Splits `first;last;email;department;salary;date[;active]` into a form.
fn parse_form(fields: &str) -> EmployeeForm {
    let mut parts = fields.split(';').map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();

    let mut form = EmployeeForm {
        first_name: next(),
        last_name: next(),
        email: next(),
        department: next(),
        salary: next(),
        join_date: next(),
        ..EmployeeForm::default()
    };
    let active = next();
    if !active.is_empty() {
        form.is_active = matches!(active.to_lowercase().as_str(), "true" | "yes" | "1" | "active");
    }
    form
}

fn render(console: &Console) {
    let departments: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
    println!();
    if !console.search_term().is_empty() {
        println!("search: {:?}", console.search_term());
    }
    println!(
        "{:>6}  {:<20} {:<32} {:<12} {:>10}  {:<10}  {}",
        "ID", "Name", "Email", "Department", "Salary", "Joined", "Status"
    );
    for employee in console.employees() {
        println!(
            "{:>6}  {:<20} {:<32} {:<12} {:>10}  {:<10}  {}",
            employee.id.get(),
            employee.full_name(),
            employee.email.as_str(),
            employee.department.as_str(),
            format_salary(employee.salary),
            employee.join_date.to_string(),
            if employee.is_active { "Active" } else { "Inactive" },
        );
    }

    if console.employees().is_empty() {
        println!("No employees found.");
        return;
    }

    let (start, end) = console.record_range();
    let strip: Vec<String> = console
        .page_numbers()
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if page == console.current_page() => format!("[{page}]"),
            marker => marker.to_string(),
        })
        .collect();
    println!(
        "Showing {start} to {end} of {} results   {} {} {}   ({} per page; departments: {})",
        console.total_records(),
        if console.has_previous() { "<" } else { " " },
        strip.join(" "),
        if console.has_next() { ">" } else { " " },
        console.page_size(),
        departments.join(", "),
    );
}
