//! Tab navigation for the profile page panels

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::model::{Page, Tab};

const ACTIVE_CLASS: &str = "active";
const FADE_OUT_CLASS: &str = "fade-out";

/// Page-wide tab switching, invoked by the controller as a layout side effect
pub trait TabNavigator: Send + Sync {
    /// Start switching to `tab`. Returns immediately; the switch completes
    /// after the fade-out.
    fn show_tab(&self, tab: Tab);
}

/// Tab navigator operating on the page's content panels and tab buttons
pub struct PageTabs<P> {
    page: Arc<Mutex<P>>,
    fade: Duration,
}

impl<P: Page + 'static> PageTabs<P> {
    pub fn new(page: Arc<Mutex<P>>, fade: Duration) -> Self {
        Self { page, fade }
    }
}

impl<P: Page + 'static> TabNavigator for PageTabs<P> {
    fn show_tab(&self, tab: Tab) {
        tracing::debug!(tab = tab.name(), "Switching tab");
        let page = self.page.clone();
        let fade = self.fade;
        tokio::spawn(async move {
            switch_tab(&page, tab, fade).await;
        });
    }
}

/// Fade out the visible panels, then show `tab`'s panel and highlight its
/// buttons. Elements missing from the page are skipped.
pub async fn switch_tab<P: Page>(page: &Mutex<P>, tab: Tab, fade: Duration) {
    {
        let mut page = page.lock().await;
        for other in Tab::ALL {
            let content = other.content_id();
            if page.is_displayed(content) == Some(true) {
                page.add_class(content, FADE_OUT_CLASS);
            }
        }
    }

    tokio::time::sleep(fade).await;

    let mut page = page.lock().await;
    for other in Tab::ALL {
        let content = other.content_id();
        page.set_displayed(content, false);
        page.remove_class(content, FADE_OUT_CLASS);
        for id in other.tab_ids() {
            page.remove_class(id, ACTIVE_CLASS);
        }
    }

    page.set_displayed(tab.content_id(), true);
    for id in tab.tab_ids() {
        page.add_class(id, ACTIVE_CLASS);
    }
}
