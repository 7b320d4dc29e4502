use std::time::Duration;

use employee_console::build_console;
use employee_console::console::{DEBOUNCE_DELAY, EmployeeConsole};
use employee_console::domain::types::{Department, PageSize};
use employee_console::forms::employee::EmployeeForm;
use employee_console::models::config::ConsoleConfig;
use employee_console::pagination::PageMarker;
use employee_console::repository::{EmployeeReader, InMemoryRepository};
use employee_console::services::ServiceError;
use employee_console::services::api::{EmployeeApi, Latency};
use tokio::time::{Instant, sleep};

mod common;

async fn staff_console() -> EmployeeConsole<InMemoryRepository> {
    let repo = InMemoryRepository::new(common::staff());
    let mut console = EmployeeConsole::new(
        EmployeeApi::new(repo, Latency::NONE),
        PageSize::default(),
        DEBOUNCE_DELAY,
    );
    console.refresh().await.expect("initial load");
    console
}

fn ids(console: &EmployeeConsole<InMemoryRepository>) -> Vec<i64> {
    console.employees().iter().map(|e| e.id.get()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_initial_listing() {
    let console = staff_console().await;

    assert_eq!(ids(&console), (1..=10).collect::<Vec<_>>());
    assert_eq!(console.total_records(), 12);
    assert_eq!(console.total_pages(), 2);
    assert_eq!(console.record_range(), (1, 10));
    assert_eq!(
        console.page_numbers(),
        vec![PageMarker::Page(1), PageMarker::Page(2)]
    );
    assert!(!console.has_previous());
    assert!(console.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_applies_last_term_and_resets_page() {
    let mut console = staff_console().await;
    console.change_page(2).await.unwrap();
    assert_eq!(console.current_page(), 2);

    console.search("g");
    sleep(Duration::from_millis(100)).await;
    console.search("ga");
    sleep(Duration::from_millis(100)).await;
    console.search("garcia");

    // Nothing is applied while typing.
    assert_eq!(console.search_term(), "");
    assert_eq!(console.search_input(), "garcia");

    let started = Instant::now();
    console.settle_search().await.unwrap();

    assert!(started.elapsed() >= DEBOUNCE_DELAY);
    assert_eq!(console.search_term(), "garcia");
    assert_eq!(console.current_page(), 1);
    assert_eq!(ids(&console), vec![6, 12]);
    assert_eq!(console.total_records(), 2);
    assert_eq!(console.total_pages(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_search_without_hits_shows_empty_page() {
    let mut console = staff_console().await;

    console.search("nobody");
    console.settle_search().await.unwrap();

    assert!(console.employees().is_empty());
    assert_eq!(console.total_records(), 0);
    assert_eq!(console.total_pages(), 0);
    assert!(console.page_numbers().is_empty());
    assert_eq!(console.current_page(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_search_lists_everything_again() {
    let mut console = staff_console().await;
    console.search("engineering");
    console.settle_search().await.unwrap();
    assert_eq!(console.total_records(), 3);

    console.search("");
    console.settle_search().await.unwrap();

    assert_eq!(console.total_records(), 12);
    assert_eq!(console.employees().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_page_size_change_resets_page() {
    let mut console = staff_console().await;
    console.change_page(2).await.unwrap();

    console
        .set_page_size(PageSize::new(25).unwrap())
        .await
        .unwrap();

    assert_eq!(console.current_page(), 1);
    assert_eq!(console.page_size().get(), 25);
    assert_eq!(console.employees().len(), 12);
    assert_eq!(console.total_pages(), 1);
    assert!(!console.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_change_page_is_clamped() {
    let mut console = staff_console().await;

    console.change_page(99).await.unwrap();
    assert_eq!(console.current_page(), 2);
    assert_eq!(ids(&console), vec![11, 12]);
    assert_eq!(console.record_range(), (11, 12));

    console.change_page(0).await.unwrap();
    assert_eq!(console.current_page(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_create_and_delete_refresh_the_list() {
    let mut console = staff_console().await;

    let created = console
        .create(&common::new_employee("Nina", "Park", Department::It))
        .await
        .unwrap();

    assert_eq!(created.id.get(), 13);
    assert_eq!(console.total_records(), 13);

    let response = console.delete(created.id).await.unwrap();

    assert!(response.success);
    assert_eq!(console.total_records(), 12);
    assert!(
        console
            .api()
            .repository()
            .get_employee_by_id(created.id)
            .unwrap()
            .is_none()
    );
}

#[tokio::test(start_paused = true)]
async fn test_deleting_last_row_moves_to_previous_page() {
    let mut console = staff_console().await;
    console.change_page(2).await.unwrap();

    console.delete(common::id(11)).await.unwrap();
    assert_eq!(console.current_page(), 2);
    assert_eq!(ids(&console), vec![12]);

    console.delete(common::id(12)).await.unwrap();

    assert_eq!(console.current_page(), 1);
    assert_eq!(console.employees().len(), 10);
    assert_eq!(console.total_pages(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_updating_missing_employee_keeps_view() {
    let mut console = staff_console().await;
    let before = ids(&console);

    let result = console
        .update(
            common::id(404),
            &common::new_employee("Ghost", "User", Department::It),
        )
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound)));
    assert_eq!(ids(&console), before);
    assert_eq!(console.total_records(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_form_submission_edits_existing_employee() {
    let mut console = staff_console().await;
    let original = console.employees()[0].clone();
    let mut form = EmployeeForm::from(&original);
    form.salary = "99000".to_string();
    form.department = "Legal".to_string();

    let updated = console.submit(form, Some(original.id)).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.salary, 99_000);
    assert_eq!(updated.department, Department::Legal);
    assert_eq!(console.employees()[0], updated);
}

#[tokio::test(start_paused = true)]
async fn test_build_console_seeds_and_lists_first_page() {
    let config = ConsoleConfig {
        seed_size: 30,
        ..ConsoleConfig::default()
    };

    let started = Instant::now();
    let console = build_console(&config, Some(11)).await.unwrap();

    assert!(started.elapsed() >= config.latency().list);
    assert_eq!(console.total_records(), 30);
    assert_eq!(console.employees().len(), 10);
    assert_eq!(
        console.page_numbers(),
        vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
    );
    assert_eq!(console.api().repository().len(), 30);
}

#[tokio::test(start_paused = true)]
async fn test_build_console_rejects_unsupported_page_size() {
    let config = ConsoleConfig {
        seed_size: 5,
        default_page_size: 7,
        ..ConsoleConfig::default()
    };

    let result = build_console(&config, Some(1)).await;

    assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
}

#[tokio::test(start_paused = true)]
async fn test_name_with_ampersand_is_stored_as_typed_and_searchable() {
    let mut console = staff_console().await;
    let form = EmployeeForm {
        first_name: "Tom & Jerry".to_string(),
        last_name: "Cartoon".to_string(),
        email: " tom.jerry@company.com ".to_string(),
        department: "Sales".to_string(),
        salary: "70000".to_string(),
        join_date: "2022-03-01".to_string(),
        ..EmployeeForm::default()
    };

    let created = console.submit(form, None).await.unwrap();
    assert_eq!(created.first_name.as_str(), "Tom & Jerry");
    assert_eq!(created.email.as_str(), "tom.jerry@company.com");

    console.search("tom & j");
    console.settle_search().await.unwrap();
    assert_eq!(ids(&console), vec![created.id.get()]);

    let edited = console
        .submit(EmployeeForm::from(&created), Some(created.id))
        .await
        .unwrap();
    assert_eq!(edited, created);
}
