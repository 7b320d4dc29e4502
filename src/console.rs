//! Console state shared by every view: debounced search, pagination and the
//! currently displayed page of employees.

use std::time::Duration;

use crate::debounce::Debounced;
use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::{EmployeeId, PageSize};
use crate::forms::employee::EmployeeForm;
use crate::pagination::{PageMarker, PageResult, PaginationState};
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::ServiceResult;
use crate::services::api::{DeleteResponse, EmployeeApi};

/// Delay between the last keystroke and the search being applied.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Rows and counts of the page currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
struct PageView {
    employees: Vec<Employee>,
    total_records: usize,
    total_pages: usize,
}

pub struct EmployeeConsole<R> {
    api: EmployeeApi<R>,
    search: Debounced<String>,
    applied_search: String,
    pagination: PaginationState,
    view: PageView,
    loading: bool,
}

impl<R> EmployeeConsole<R>
where
    R: EmployeeReader + EmployeeWriter,
{
    /// Builds the console. Nothing is listed until [`Self::refresh`] runs.
    /// Must be called inside a tokio runtime.
    pub fn new(api: EmployeeApi<R>, page_size: PageSize, debounce_delay: Duration) -> Self {
        Self {
            api,
            search: Debounced::new(String::new(), debounce_delay),
            applied_search: String::new(),
            pagination: PaginationState::new(1, page_size),
            view: PageView::default(),
            loading: false,
        }
    }

    pub fn api(&self) -> &EmployeeApi<R> {
        &self.api
    }

    pub fn employees(&self) -> &[Employee] {
        &self.view.employees
    }

    pub fn total_records(&self) -> usize {
        self.view.total_records
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Search term the current page was listed with.
    pub fn search_term(&self) -> &str {
        &self.applied_search
    }

    /// Text typed so far, possibly not yet applied.
    pub fn search_input(&self) -> String {
        self.search.raw()
    }

    pub fn page_numbers(&self) -> Vec<PageMarker> {
        self.pagination.page_numbers(self.view.total_pages)
    }

    pub fn record_range(&self) -> (usize, usize) {
        self.pagination.record_range(self.view.total_records)
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next(self.view.total_pages)
    }

    /// Records a keystroke in the search box. The list follows once typing
    /// pauses, see [`Self::settle_search`].
    pub fn search(&self, text: impl Into<String>) {
        self.search.set(text.into());
    }

    /// Waits for the search input to settle and applies it.
    pub async fn settle_search(&mut self) -> ServiceResult<()> {
        self.search.changed().await;
        self.apply_search().await
    }

    /// Applies the settled search term if it differs from the one in use,
    /// going back to the first page.
    pub async fn apply_search(&mut self) -> ServiceResult<()> {
        let settled = self.search.get();
        if settled == self.applied_search {
            return Ok(());
        }
        log::debug!("Applying search term {settled:?}");
        self.applied_search = settled;
        self.pagination.set_current_page(1);
        self.refresh().await
    }

    pub async fn set_page_size(&mut self, page_size: PageSize) -> ServiceResult<()> {
        self.pagination.set_page_size(page_size);
        self.pagination.set_current_page(1);
        self.refresh().await
    }

    pub async fn change_page(&mut self, page: usize) -> ServiceResult<()> {
        self.pagination.go_to_page(page, self.view.total_pages);
        self.refresh().await
    }

    /// Lists the current page again.
    ///
    /// When the current page lies past the last page (for example after the
    /// last row of the last page was deleted) it moves to the new last page.
    /// On failure the previously shown page is kept.
    pub async fn refresh(&mut self) -> ServiceResult<()> {
        self.loading = true;
        let result = self.load_page().await;
        self.loading = false;

        result.inspect_err(|err| log::error!("Error fetching employees: {err}"))
    }

    async fn load_page(&mut self) -> ServiceResult<()> {
        let mut page = self.list_current().await?;

        if page.is_empty() && page.total_pages > 0 && self.current_page() > page.total_pages {
            self.pagination.go_to_page(page.total_pages, page.total_pages);
            page = self.list_current().await?;
        }

        self.view = PageView {
            employees: page.items,
            total_records: page.total,
            total_pages: page.total_pages,
        };
        Ok(())
    }

    async fn list_current(&self) -> ServiceResult<PageResult<Employee>> {
        self.api
            .list(
                self.pagination.current_page(),
                self.pagination.page_size(),
                &self.applied_search,
            )
            .await
    }

    pub async fn create(&mut self, data: &NewEmployee) -> ServiceResult<Employee> {
        let employee = self
            .api
            .create(data)
            .await
            .inspect_err(|err| log::error!("Error creating employee: {err}"))?;
        self.refresh().await?;
        Ok(employee)
    }

    pub async fn update(&mut self, id: EmployeeId, data: &NewEmployee) -> ServiceResult<Employee> {
        let employee = self
            .api
            .update(id, data)
            .await
            .inspect_err(|err| log::error!("Error updating employee: {err}"))?;
        self.refresh().await?;
        Ok(employee)
    }

    pub async fn delete(&mut self, id: EmployeeId) -> ServiceResult<DeleteResponse> {
        let response = self
            .api
            .delete(id)
            .await
            .inspect_err(|err| log::error!("Error deleting employee: {err}"))?;
        self.refresh().await?;
        Ok(response)
    }

    /// Validates the add/edit form and saves it. `editing` names the employee
    /// being edited; `None` creates a new one.
    pub async fn submit(
        &mut self,
        form: EmployeeForm,
        editing: Option<EmployeeId>,
    ) -> ServiceResult<Employee> {
        let data = NewEmployee::try_from(form).inspect_err(|err| {
            log::error!("Form submission error: {err}");
        })?;

        match editing {
            Some(id) => self.update(id, &data).await,
            None => self.create(&data).await,
        }
    }
}
