use leptos::prelude::*;

/// Routed pages of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    TcaForecast,
    SkuForecast,
    Upload,
    Master,
    Issues,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::TcaForecast => "TCA Forecast",
            Page::SkuForecast => "SKU Forecast",
            Page::Upload => "Data Upload",
            Page::Master => "Master Data",
            Page::Issues => "Issues",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::TcaForecast => "trending-up",
            Page::SkuForecast => "package",
            Page::Upload => "upload",
            Page::Master => "database",
            Page::Issues => "alert-triangle",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::TcaForecast,
            Page::SkuForecast,
            Page::Upload,
            Page::Master,
            Page::Issues,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
